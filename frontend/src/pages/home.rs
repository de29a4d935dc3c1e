use yew::prelude::*;

use crate::components::gallery::{background_style, Gallery};
use crate::components::hover::{on_hover_drop, on_hover_lift};
use crate::components::nav::{on_anchor_click, Nav};
use crate::forms::contact::ContactForm;
use crate::forms::registration::RegistrationForm;

struct ClassCard {
    image: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const CLASSES: &[ClassCard] = &[
    ClassCard {
        image: "/rjl-assets/images/class-baking.jpg",
        title: "Baking Basics",
        blurb: "Breads, doughs and the fundamentals, in a relaxed three-hour session.",
    },
    ClassCard {
        image: "/rjl-assets/images/class-pastry.jpg",
        title: "Pastry Masterclass",
        blurb: "Laminated doughs, tarts and choux with our head pastry chef.",
    },
    ClassCard {
        image: "/rjl-assets/images/class-latte.jpg",
        title: "Coffee & Latte Art",
        blurb: "Espresso extraction, milk texturing and pouring your first rosetta.",
    },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub api_base: AttrValue,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <>
            <Nav />
            <section id="home" class="hero">
                <div class="hero-content glass-card slide-up">
                    <h1>{"RJL Group"}</h1>
                    <p>{"Bakery, café and cooking studio. Come taste, come learn."}</p>
                    <div class="hero-actions">
                        <a
                            href="#register"
                            class="btn-glass"
                            onclick={on_anchor_click("#register")}
                            onmouseenter={on_hover_lift()}
                            onmouseleave={on_hover_drop()}
                        >
                            {"Book a Class"}
                        </a>
                        <a
                            href="#contact"
                            class="btn-small"
                            onclick={on_anchor_click("#contact")}
                            onmouseenter={on_hover_lift()}
                            onmouseleave={on_hover_drop()}
                        >
                            {"Get in Touch"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="about" class="section">
                <div class="glass-card slide-up">
                    <h2>{"About Us"}</h2>
                    <p>
                        {"We are a small family team baking every morning and teaching every \
                          afternoon. Everything on the counter is made in the studio you \
                          can book a class in."}
                    </p>
                </div>
            </section>

            <section id="classes" class="section">
                <h2 class="slide-up">{"Classes"}</h2>
                <div class="class-grid">
                    { for CLASSES.iter().map(|class| html! {
                        <div class="class-card glass-card slide-up">
                            <div class="product-image" style={background_style(class.image)}></div>
                            <h3>{class.title}</h3>
                            <p>{class.blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="gallery" class="section">
                <h2 class="slide-up">{"Gallery"}</h2>
                <Gallery />
            </section>

            <section id="register" class="section">
                <h2 class="slide-up">{"Register for a Class"}</h2>
                <RegistrationForm api_base={props.api_base.clone()} />
            </section>

            <section id="contact" class="section">
                <h2 class="slide-up">{"Contact Us"}</h2>
                <ContactForm api_base={props.api_base.clone()} />
            </section>

            <footer class="footer">
                <p>{"© RJL Group"}</p>
            </footer>
        </>
    }
}
