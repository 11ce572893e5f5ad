//! Animation styles and the scroll-reveal observer for the landing page.

use leptos::prelude::*;

/// CSS for entrance, hover and loading animations
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Loading screen */
            .loading-container {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background-color: var(--color-background);
            }
            .loading-lines {
                display: flex;
                gap: 0.5rem;
                align-items: flex-end;
                height: 3rem;
            }
            .loading-line {
                width: 0.375rem;
                height: 100%;
                border-radius: 9999px;
                background-color: var(--color-primary);
                animation: loading-bounce 1s ease-in-out infinite;
            }
            .loading-line:nth-child(2) { animation-delay: 0.1s; }
            .loading-line:nth-child(3) { animation-delay: 0.2s; }
            .loading-line:nth-child(4) { animation-delay: 0.3s; }

            @keyframes loading-bounce {
                0%, 100% { transform: scaleY(0.3); }
                50% { transform: scaleY(1); }
            }

            /* Buttons */
            .cta-button {
                padding: 0.75rem 1.5rem;
                font-weight: 600;
                color: var(--color-primary-foreground);
                background-color: var(--color-primary);
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .demo-button {
                padding: 0.75rem 1.5rem;
                font-weight: 600;
                color: var(--color-foreground);
                border: 2px solid var(--color-border);
                border-radius: 0.75rem;
                background-color: var(--color-card);
                cursor: pointer;
            }
            .nav-button {
                padding: 0.5rem 1rem;
                border-radius: 0.5rem;
                font-size: 0.875rem;
                font-weight: 500;
                color: var(--color-muted-foreground);
                transition: color 0.2s, background-color 0.2s;
            }
            .nav-button:hover { color: var(--color-foreground); }
            .nav-button.active {
                color: var(--color-primary);
                background-color: color-mix(in srgb, var(--color-primary) 10%, transparent);
            }

            /* Theme toggle */
            .theme-toggle {
                position: relative;
                width: 3rem;
                height: 1.5rem;
                border-radius: 9999px;
                background-color: #f59e0b;
                transition: background-color 0.3s;
            }
            .theme-toggle.dark { background-color: #4f46e5; }
            .theme-toggle-icon {
                position: absolute;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                transition: opacity 0.2s;
            }

            /* Hover micro-interactions */
            .hover-scale { transition: transform 0.2s cubic-bezier(0.34, 1.56, 0.64, 1); }
            .hover-scale:hover { transform: scale(1.05); }
            .hover-scale:active { transform: scale(0.95); }
            .hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; }
            .hover-lift:hover { transform: translateY(-5px); }
            .hover-nudge { transition: transform 0.2s ease; }
            .hover-nudge:hover { transform: translateX(4px); }
            .hover-pop { transition: transform 0.2s ease; display: inline-block; }
            .hover-pop:hover { transform: scale(1.2) translateY(-2px); }
            .hover-pop:active { transform: scale(0.9); }
            .hover-press { transition: transform 0.15s ease; }
            .hover-press:hover { transform: scale(1.02); }
            .hover-press:active { transform: scale(0.98); }
            .hover-grow { transition: transform 0.3s ease; }
            .hover-grow:hover { transform: scale(1.02); }

            /* Entrance animations */
            @keyframes fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .fade-in-up { animation: fade-in-up 0.6s ease-out both; }
            .delay-300 { animation-delay: 0.3s; }
            .delay-500 { animation-delay: 0.5s; }
            .delay-700 { animation-delay: 0.7s; }
            .delay-900 { animation-delay: 0.9s; }

            .page-enter { animation: fade-in-up 0.8s ease-out both; }

            @keyframes nav-slide-in {
                from { transform: translateY(-100px); }
                to { transform: translateY(0); }
            }
            .nav-slide-in { animation: nav-slide-in 0.6s ease-out both; }

            @keyframes price-pop {
                from { opacity: 0; transform: scale(0.9); }
                to { opacity: 1; transform: scale(1); }
            }
            .price-pop { animation: price-pop 0.3s ease-out both; }

            /* Scroll reveal, applied once */
            .scroll-animate {
                opacity: 0;
                transform: translateY(20px);
                transition-property: opacity, transform;
                transition-duration: 0.6s;
                transition-timing-function: ease-out;
            }
            .scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Ambient motion */
            @keyframes float-slow {
                0%, 100% { transform: translateY(-10px); }
                50% { transform: translateY(10px); }
            }
            .float-slow { animation: float-slow 6s ease-in-out infinite; }

            @keyframes spin-cw { to { transform: rotate(360deg); } }
            @keyframes spin-ccw { to { transform: rotate(-360deg); } }
            .spin { animation: spin-cw 20s linear infinite; }
            .spin-reverse { animation: spin-ccw 25s linear infinite; }

            @keyframes bob {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, 10px); }
            }
            .bob { animation: bob 2s ease-in-out infinite; }

            @keyframes scroll-dot {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(12px); }
            }
            .scroll-dot { animation: scroll-dot 2s ease-in-out infinite; }

            .play-triangle {
                width: 0;
                height: 0;
                border-left: 16px solid var(--color-primary);
                border-top: 12px solid transparent;
                border-bottom: 12px solid transparent;
            }

            /* Custom cursor */
            .custom-cursor-dot,
            .custom-cursor-ring {
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                z-index: 200;
                border-radius: 9999px;
            }
            .custom-cursor-dot {
                width: 6px;
                height: 6px;
                background-color: var(--color-primary);
            }
            .custom-cursor-ring {
                width: 32px;
                height: 32px;
                border: 2px solid var(--color-primary);
                opacity: 0.5;
                transition: transform 0.12s ease-out;
            }
            @media (pointer: coarse) {
                .custom-cursor-dot,
                .custom-cursor-ring { display: none; }
            }

            @media (prefers-reduced-motion: reduce) {
                .fade-in-up, .page-enter, .nav-slide-in, .price-pop,
                .float-slow, .spin, .spin-reverse, .bob, .scroll-dot {
                    animation: none;
                }
                .scroll-animate { opacity: 1; transform: none; transition: none; }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver.
///
/// Observes elements added later too, since page switches replace sections.
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    const observeAll = () => {
                        document.querySelectorAll('.scroll-animate:not(.visible)').forEach(el => {
                            observer.observe(el);
                        });
                    };

                    observeAll();
                    new MutationObserver(observeAll).observe(document.body, {
                        childList: true,
                        subtree: true
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
