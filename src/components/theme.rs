use yew::prelude::*;

// Shared rules used across pages; page-specific styling stays in each page's
// own <style> block.
#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
        {r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            background: #00040f;
            color: #ffffff;
            font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }
        a {
            text-decoration: none;
            color: inherit;
        }
        .text-gradient {
            background: linear-gradient(157deg, #ffffff 0%, #00f6ff 50%, #7EB2FF 100%);
            -webkit-background-clip: text;
            background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .typo-h1 { font-size: 4rem; font-weight: 700; line-height: 1.1; }
        .typo-h2 { font-size: 3rem; font-weight: 700; line-height: 1.15; }
        .typo-h3 { font-size: 2.25rem; font-weight: 600; line-height: 1.2; }
        .typo-h4 { font-size: 1.6rem; font-weight: 600; line-height: 1.25; }
        .typo-subtitle { font-size: 1.3rem; font-weight: 500; line-height: 1.6; }
        .typo-body { font-size: 1.1rem; line-height: 1.7; }
        @media (max-width: 768px) {
            .typo-h1 { font-size: 2.5rem; }
            .typo-h2 { font-size: 2rem; }
            .typo-h3 { font-size: 1.6rem; }
        }
        .typo-char {
            display: inline-block;
            opacity: 0;
            animation: char-in 0.6s ease-out forwards;
        }
        @keyframes char-in {
            from { transform: translateY(40px) scale(0.8); opacity: 0; }
            to { transform: translateY(0) scale(1); opacity: 1; }
        }
        .dim { color: rgba(255, 255, 255, 0.7); }
        .section {
            padding: 6rem 2rem;
            position: relative;
            z-index: 1;
        }
        .section-inner {
            max-width: 1280px;
            margin: 0 auto;
        }
        .card {
            background: linear-gradient(144.39deg, rgba(255, 255, 255, 0.02) -278.56%, rgba(20, 16, 30, 0.9) 91.61%);
            border: 1px solid #3F3E45;
            border-radius: 20px;
            padding: 2rem;
            transition: border-color 0.3s ease, transform 0.3s ease;
        }
        .card:hover {
            border-color: #00f6ff;
            transform: translateY(-5px);
        }
        .btn-primary {
            display: inline-block;
            padding: 1rem 1.5rem;
            font-size: 18px;
            font-weight: 500;
            color: #00040f;
            background: linear-gradient(157deg, #def9fa 0%, #00f6ff 50%, #5ce1e6 100%);
            border: none;
            border-radius: 10px;
            cursor: pointer;
            text-align: center;
            transition: transform 0.3s ease;
        }
        .btn-primary:hover {
            transform: scale(1.05);
        }
        .btn-outline {
            display: inline-block;
            padding: 1rem 1.5rem;
            font-size: 18px;
            font-weight: 500;
            color: #00f6ff;
            background: transparent;
            border: 2px solid #00f6ff;
            border-radius: 10px;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .btn-outline:hover {
            background: #00f6ff;
            color: #00040f;
        }
        .field-label {
            display: block;
            color: #ffffff;
            font-weight: 600;
            margin-bottom: 0.75rem;
        }
        .field-input {
            width: 100%;
            background: rgba(0, 0, 0, 0.4);
            border: 1px solid #3F3E45;
            border-radius: 16px;
            padding: 1rem 1.5rem;
            color: #ffffff;
            font-size: 1rem;
            transition: border-color 0.3s ease;
        }
        .field-input:focus {
            border-color: #00f6ff;
            outline: none;
        }
        .field-input::placeholder {
            color: rgba(255, 255, 255, 0.4);
        }
        .reveal {
            opacity: 0;
            transform: translateY(60px);
            transition: opacity 0.9s ease, transform 0.9s ease;
        }
        .reveal.visible {
            opacity: 1;
            transform: translateY(0);
        }
        .loading-spinner {
            display: inline-block;
            width: 20px;
            height: 20px;
            border: 3px solid rgba(255, 255, 255, 0.3);
            border-radius: 50%;
            border-top-color: #ffffff;
            animation: spin 1s ease-in-out infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        @keyframes pulse {
            0%, 100% { opacity: 0.4; }
            50% { opacity: 1; }
        }
        "#}
        </style>
    }
}
