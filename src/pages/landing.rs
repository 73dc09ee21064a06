use yew::prelude::*;

use crate::interactions::controller;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire up page interactions once the DOM is mounted
    {
        use_effect_with_deps(
            move |_| {
                controller::init();
                || ()
            },
            (), // Empty dependencies array means this effect runs only once on mount
        );
    }

    html! {
        <div class="landing-page">
            <nav class="navbar">
                <span class="nav-logo">{"quantgrid"}</span>
                <div class="nav-links">
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <a href="#performance" class="nav-link">{"Performance"}</a>
                    <a href="#pricing" class="nav-link">{"Pricing"}</a>
                </div>
            </nav>

            // Hero Section
            <section class="hero">
                <h1>{"Automated Futures Trading, Done Right"}</h1>
                <p class="hero-subtitle">
                    {"Professional order execution for Binance Futures. Grid, TWAP and OCO strategies from one command-line tool."}
                </p>
                <a href="#pricing" class="hero-cta">{"Get Started"}</a>
            </section>

            // Features Section
            <section id="features" class="features">
                <h2>{"Every Order Type You Need"}</h2>
                <p>{"Place and manage advanced orders without touching the exchange UI."}</p>

                <div class="features-grid">
                    <div class="feature-card">
                        <h3>{"Market & Limit Orders"}</h3>
                        <p>{"Instant fills or precise entries with full quantity and price validation."}</p>
                    </div>

                    <div class="feature-card">
                        <h3>{"OCO Protection"}</h3>
                        <p>{"Take-profit and stop-loss placed together. One fills, the other cancels."}</p>
                    </div>

                    <div class="feature-card">
                        <h3>{"TWAP Execution"}</h3>
                        <p>{"Split large orders into timed chunks to minimize market impact."}</p>
                    </div>

                    <div class="feature-card">
                        <h3>{"Grid Trading"}</h3>
                        <p>{"Automated buy-low sell-high ladders across your chosen price range."}</p>
                    </div>
                </div>
            </section>

            // Performance Section
            <section id="performance" class="performance">
                <h2>{"Consistent Monthly Returns"}</h2>
                <p>{"Backtested grid strategy performance over the last six months."}</p>

                <div class="growth-chart">
                    <div class="bar" style="height: 32%;"><span>{"Mar"}</span></div>
                    <div class="bar" style="height: 45%;"><span>{"Apr"}</span></div>
                    <div class="bar" style="height: 41%;"><span>{"May"}</span></div>
                    <div class="bar" style="height: 58%;"><span>{"Jun"}</span></div>
                    <div class="bar" style="height: 72%;"><span>{"Jul"}</span></div>
                    <div class="bar" style="height: 86%;"><span>{"Aug"}</span></div>
                </div>
            </section>

            // Pricing Section
            <section id="pricing" class="pricing">
                <h2>{"Simple Pricing"}</h2>
                <p>{"Free while in beta. Bring your own API keys, keep your own funds."}</p>
                <a href="#features" class="pricing-cta">{"See what's included"}</a>
            </section>

            <footer class="footer">
                <p>{"© 2026 quantgrid. Trading futures involves substantial risk of loss."}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        background: #0d111c;
                        color: #e8eaf0;
                        font-family: system-ui, sans-serif;
                        min-height: 100vh;
                    }

                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: rgba(13, 17, 28, 0.85);
                        padding: 1.2rem 2rem;
                        backdrop-filter: blur(8px);
                        transition: background 0.3s ease, padding 0.3s ease;
                        z-index: 10;
                    }

                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.2rem;
                        color: #7ee0b8;
                    }

                    .nav-link {
                        color: #e8eaf0;
                        text-decoration: none;
                        margin-left: 2rem;
                    }

                    .nav-link:hover {
                        color: #7ee0b8;
                    }

                    .hero {
                        padding: 10rem 2rem 6rem;
                        text-align: center;
                    }

                    .hero h1 {
                        font-size: 2.8rem;
                        margin-bottom: 1rem;
                    }

                    .hero-subtitle {
                        color: #9aa3b5;
                        max-width: 40rem;
                        margin: 0 auto 2rem;
                    }

                    .hero-cta, .pricing-cta {
                        display: inline-block;
                        background: #7ee0b8;
                        color: #0d111c;
                        padding: 0.8rem 2rem;
                        border-radius: 6px;
                        font-weight: 600;
                        text-decoration: none;
                    }

                    .features, .performance, .pricing {
                        padding: 5rem 2rem;
                        text-align: center;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        max-width: 60rem;
                        margin: 3rem auto 0;
                    }

                    .feature-card {
                        background: #161c2c;
                        border: 1px solid #242d42;
                        border-radius: 8px;
                        padding: 2rem 1.5rem;
                        text-align: left;
                    }

                    .feature-card p {
                        color: #9aa3b5;
                    }

                    .growth-chart {
                        display: flex;
                        align-items: flex-end;
                        justify-content: center;
                        gap: 1.5rem;
                        height: 280px;
                        max-width: 40rem;
                        margin: 3rem auto 0;
                    }

                    .bar {
                        width: 3rem;
                        background: linear-gradient(180deg, #7ee0b8, #3a9c77);
                        border-radius: 4px 4px 0 0;
                        position: relative;
                        transform-origin: bottom;
                        animation: grow-bar 0.9s ease-out both;
                        animation-play-state: paused;
                    }

                    .bar span {
                        position: absolute;
                        bottom: -1.8rem;
                        left: 0;
                        right: 0;
                        color: #9aa3b5;
                        font-size: 0.85rem;
                    }

                    @keyframes grow-bar {
                        from {
                            transform: scaleY(0);
                            opacity: 0;
                        }
                        to {
                            transform: scaleY(1);
                            opacity: 1;
                        }
                    }

                    .footer {
                        padding: 3rem 2rem;
                        text-align: center;
                        color: #9aa3b5;
                        border-top: 1px solid #242d42;
                    }
                "#}
            </style>
        </div>
    }
}
