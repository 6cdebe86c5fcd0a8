use crate::state::filter::Category;

pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub author_title: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub views: &'static str,
    pub likes: &'static str,
    pub icon: &'static str,
}

pub const FEATURED_POST: BlogPost = BlogPost {
    title: "The Future of Digital Banking: AI Revolution in Finance 2024",
    excerpt: "Discover how artificial intelligence and quantum computing are reshaping the financial industry, creating unprecedented opportunities for secure, instant, and intelligent banking solutions.",
    author: "Dr. Sarah Johnson",
    author_title: "Chief AI Officer",
    date: "December 15, 2023",
    read_time: "12 min read",
    category: Category::Technology,
    tags: &["AI", "Quantum", "Future Tech"],
    views: "15.2K",
    likes: "1.2K",
    icon: "⭐",
};

pub static BLOG_POSTS: [BlogPost; 6] = [
    BlogPost {
        title: "Advanced Security Protocols: Zero-Trust Banking Architecture",
        excerpt: "Learn how zero-trust security models are revolutionizing financial data protection and customer privacy in the digital age.",
        author: "Michael Chen",
        author_title: "Security Expert",
        date: "December 12, 2023",
        read_time: "8 min read",
        category: Category::Security,
        tags: &["Security", "Zero-Trust", "Privacy"],
        views: "12.8K",
        likes: "956",
        icon: "🛡",
    },
    BlogPost {
        title: "Cryptocurrency Integration: The Next Financial Evolution",
        excerpt: "How traditional banks are embracing cryptocurrency and DeFi protocols to create hybrid financial ecosystems.",
        author: "Emma Rodriguez",
        author_title: "Blockchain Specialist",
        date: "December 10, 2023",
        read_time: "10 min read",
        category: Category::Crypto,
        tags: &["Crypto", "DeFi", "Blockchain"],
        views: "18.5K",
        likes: "1.4K",
        icon: "💲",
    },
    BlogPost {
        title: "Mobile-First Banking: UX Trends Shaping 2024",
        excerpt: "Explore cutting-edge mobile banking interfaces and user experience innovations that are setting new industry standards.",
        author: "David Kim",
        author_title: "UX Director",
        date: "December 8, 2023",
        read_time: "7 min read",
        category: Category::Mobile,
        tags: &["Mobile", "UX", "Design"],
        views: "9.7K",
        likes: "723",
        icon: "📈",
    },
    BlogPost {
        title: "Fintech Partnerships: Building the Financial Ecosystem",
        excerpt: "Strategic alliances between traditional banks and fintech startups are creating unprecedented innovation opportunities.",
        author: "Lisa Wang",
        author_title: "Strategy Lead",
        date: "December 5, 2023",
        read_time: "6 min read",
        category: Category::Partnerships,
        tags: &["Partnerships", "Strategy", "Innovation"],
        views: "11.2K",
        likes: "834",
        icon: "🤝",
    },
    BlogPost {
        title: "Biometric Authentication: The Password-Free Future",
        excerpt: "Revolutionary biometric technologies are making passwords obsolete while enhancing security and user experience.",
        author: "Alex Thompson",
        author_title: "Biometrics Engineer",
        date: "December 3, 2023",
        read_time: "9 min read",
        category: Category::Security,
        tags: &["Biometrics", "Authentication", "Future"],
        views: "14.6K",
        likes: "1.1K",
        icon: "🛡",
    },
    BlogPost {
        title: "Quantum Computing in Finance: Unprecedented Speed",
        excerpt: "How quantum computing is revolutionizing transaction processing, risk analysis, and financial modeling.",
        author: "Maria Garcia",
        author_title: "Quantum Researcher",
        date: "December 1, 2023",
        read_time: "11 min read",
        category: Category::Technology,
        tags: &["Quantum", "Computing", "Innovation"],
        views: "16.3K",
        likes: "1.3K",
        icon: "⚡",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HOME_STATS: [Stat; 3] = [
    Stat { value: "3800+", label: "User Active" },
    Stat { value: "230+", label: "Trusted by Company" },
    Stat { value: "$230M+", label: "Transaction" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub static BUSINESS_FEATURES: [Feature; 3] = [
    Feature {
        icon: "⭐",
        title: "Rewards",
        content: "The best credit cards offer some tantalizing combinations of promotions and prizes.",
    },
    Feature {
        icon: "🛡",
        title: "100% Secured",
        content: "We take proactive steps to make sure your information and transactions are secure.",
    },
    Feature {
        icon: "📤",
        title: "Balance Transfer",
        content: "A balance transfer credit card can save you a lot of money in interest charges.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

pub static FEEDBACK: [Testimonial; 3] = [
    Testimonial {
        quote: "Money makes your life easier. If you're lucky to have it, you're lucky.",
        name: "Herman Jensen",
        title: "Founder & Leader",
    },
    Testimonial {
        quote: "Money makes your life easier. If you're lucky to have it, you're lucky.",
        name: "Steve Mark",
        title: "Founder & Leader",
    },
    Testimonial {
        quote: "It is usually people in the money business, finance, and international trade that are really rich.",
        name: "Kenn Gallagher",
        title: "Founder & Leader",
    },
];

pub static CLIENTS: [&str; 4] = ["airbnb", "binance", "coinbase", "dropbox"];

pub struct OnboardingStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub static ONBOARDING_STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        number: "01",
        title: "Sign Up & Verify",
        description: "Create your account in under 2 minutes with military-grade security verification and instant approval.",
        icon: "👥",
        features: &["Biometric verification", "Instant approval", "Zero paperwork"],
    },
    OnboardingStep {
        number: "02",
        title: "Connect Your Bank",
        description: "Securely link unlimited bank accounts using our quantum-encrypted connection system with read-only access.",
        icon: "💳",
        features: &["Quantum encryption", "Multi-bank sync", "Real-time updates"],
    },
    OnboardingStep {
        number: "03",
        title: "Start Transferring",
        description: "Send money instantly worldwide with AI-powered routing and sub-second processing speeds.",
        icon: "⚡",
        features: &["AI-powered routing", "Sub-second transfers", "Global coverage"],
    },
];

pub struct PlatformFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

pub static PLATFORM_FEATURES: [PlatformFeature; 3] = [
    PlatformFeature {
        icon: "🛡",
        title: "Military-Grade Security",
        description: "Your data is protected with the same quantum encryption used by space agencies and central banks worldwide.",
        stats: "99.99% uptime",
    },
    PlatformFeature {
        icon: "🌍",
        title: "Global Network",
        description: "Send money to 195+ countries with AI-optimized routes and guaranteed best exchange rates.",
        stats: "195+ countries",
    },
    PlatformFeature {
        icon: "🔒",
        title: "Zero-Knowledge Privacy",
        description: "We use advanced zero-knowledge proofs ensuring complete privacy without storing sensitive data.",
        stats: "100% private",
    },
];

pub struct CountStat {
    pub target: f64,
    pub decimals: usize,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static NETWORK_STATS: [CountStat; 4] = [
    CountStat { target: 5_000_000.0, decimals: 0, prefix: "", suffix: "+", label: "Active Users" },
    CountStat { target: 195.0, decimals: 0, prefix: "", suffix: "+", label: "Countries" },
    CountStat { target: 500.0, decimals: 0, prefix: "$", suffix: "B+", label: "Billion Transferred" },
    CountStat { target: 99.99, decimals: 2, prefix: "", suffix: "%", label: "Uptime" },
];

pub static PARTNER_STATS: [CountStat; 4] = [
    CountStat { target: 500.0, decimals: 0, prefix: "", suffix: "+", label: "Active Partners" },
    CountStat { target: 195.0, decimals: 0, prefix: "", suffix: "+", label: "Countries" },
    CountStat { target: 50.0, decimals: 0, prefix: "$", suffix: "M+", label: "Partner Revenue" },
    CountStat { target: 99.99, decimals: 2, prefix: "", suffix: "%", label: "Platform Uptime" },
];

pub struct PartnershipType {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub commission: &'static str,
}

pub static PARTNERSHIP_TYPES: [PartnershipType; 3] = [
    PartnershipType {
        slug: "technology-partner",
        name: "Technology Partner",
        description: "Integrate with our APIs and build innovative financial solutions that reshape the industry",
        icon: "🏢",
        features: &["API access", "Technical support", "Co-development"],
        commission: "15-25%",
    },
    PartnershipType {
        slug: "channel-partner",
        name: "Channel Partner",
        description: "Resell our services to your customer base and earn competitive commissions with full support",
        icon: "🤝",
        features: &["Sales training", "Marketing support", "Lead generation"],
        commission: "20-35%",
    },
    PartnershipType {
        slug: "strategic-partner",
        name: "Strategic Partner",
        description: "Collaborate on joint ventures and co-branded solutions that drive mutual growth",
        icon: "🎯",
        features: &["Joint ventures", "Co-branding", "Strategic planning"],
        commission: "25-40%",
    },
];

pub struct PartnerBenefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub stats: &'static str,
}

pub static PARTNER_BENEFITS: [PartnerBenefit; 4] = [
    PartnerBenefit {
        icon: "📈",
        title: "Exponential Revenue Growth",
        description: "Unlock multiple revenue streams with our comprehensive partner ecosystem. Average partners see 300% revenue increase in the first year.",
        features: &["Performance-based commissions", "Quarterly bonuses", "Exclusive territory rights"],
        stats: "300% average growth",
    },
    PartnerBenefit {
        icon: "👥",
        title: "Global Customer Network",
        description: "Access our network of 5M+ active users across 195 countries. Leverage our customer insights and marketing intelligence.",
        features: &["5M+ active users", "Advanced analytics", "Personalized campaigns"],
        stats: "5M+ customers",
    },
    PartnerBenefit {
        icon: "⚡",
        title: "Cutting-Edge Technology",
        description: "Leverage our quantum-powered infrastructure, AI-driven insights, and white-label solutions to accelerate your growth.",
        features: &["Quantum infrastructure", "AI-powered insights", "White-label solutions"],
        stats: "99.99% uptime",
    },
    PartnerBenefit {
        icon: "🌍",
        title: "International Expansion",
        description: "Expand to 195+ countries with our global compliance framework, local partnerships, and multi-currency support.",
        features: &["195+ countries", "Local compliance", "Multi-currency support"],
        stats: "195+ countries",
    },
];

pub static PARTNER_TESTIMONIALS: [PartnerQuote; 2] = [
    PartnerQuote {
        name: "Sarah Chen",
        company: "TechFlow Solutions",
        quote: "Partnering with HooBank transformed our business. We've seen 400% growth in just 8 months.",
        avatar: "SC",
    },
    PartnerQuote {
        name: "Marcus Rodriguez",
        company: "Global Finance Corp",
        quote: "The technology and support are exceptional. Best partnership decision we've made.",
        avatar: "MR",
    },
];

pub struct PartnerQuote {
    pub name: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub struct FormStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static FORM_STEPS: [FormStep; 3] = [
    FormStep { title: "Company Info", description: "Basic company details" },
    FormStep { title: "Partnership Type", description: "Choose your path" },
    FormStep { title: "Goals & Vision", description: "Tell us your story" },
];

pub static INDUSTRY_OPTIONS: [(&str, &str); 7] = [
    ("", "Select Industry"),
    ("fintech", "Fintech"),
    ("banking", "Banking"),
    ("ecommerce", "E-commerce"),
    ("technology", "Technology"),
    ("consulting", "Consulting"),
    ("other", "Other"),
];

pub static EMPLOYEE_OPTIONS: [(&str, &str); 6] = [
    ("", "Select Size"),
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("500+", "500+ employees"),
];

pub static KNOWLEDGE_STATS: [Stat; 3] = [
    Stat { value: "200+", label: "Expert Articles" },
    Stat { value: "50K+", label: "Monthly Readers" },
    Stat { value: "95%", label: "Reader Satisfaction" },
];

// Seed shown before anyone signs up in the current page view
pub const WAITLIST_SEED: u32 = 12_847;
