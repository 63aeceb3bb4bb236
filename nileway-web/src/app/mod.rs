pub mod handlers;
pub mod state;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::gallery::{GALLERY_IMAGES, Gallery};
use crate::components::header::Header;
use crate::components::mobile_menu::MobileMenu;
use crate::components::scroll_top::ScrollTop;
use crate::components::sections::{About, Hero};
use crate::components::testimonial_form::TestimonialForm;
use crate::components::toast::Toast;
use crate::components::whatsapp_fab::WhatsappFab;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();

    // The scroll reactor and the reveal library attach once per page.
    use_effect_with((), |_| {
        crate::scroll::attach();
        crate::reveal::init_scroll_reveal();
    });

    let handlers = handlers::build(&app_state);
    let lang = *app_state.current_language;
    let images: Vec<AttrValue> = GALLERY_IMAGES.iter().copied().map(AttrValue::from).collect();

    html! {
        <>
            <Header
                lang={lang}
                menu_open={*app_state.menu_open}
                on_lang_change={handlers.lang_change.clone()}
                on_menu_toggle={handlers.menu_toggle.clone()} />
            <MobileMenu
                lang={lang}
                open={*app_state.menu_open}
                on_close={handlers.menu_close.clone()} />
            <main>
                <Hero lang={lang} />
                <About lang={lang} />
                <section id="gallery" class="gallery-section">
                    <h2>{ t("gallery.title") }</h2>
                    <Gallery
                        images={images}
                        overlay_open={app_state.viewer_open()}
                        active_card={*app_state.active_card}
                        card_transform={app_state.card_transform.as_ref().map(|s| AttrValue::from(s.clone()))}
                        on_card_click={handlers.card_click.clone()}
                        on_overlay_click={handlers.overlay_click.clone()} />
                </section>
                <section id="testimonials" class="testimonials-section">
                    <h2>{ t("testimonials.title") }</h2>
                    <TestimonialForm lang={lang} on_notify={handlers.notify.clone()} />
                </section>
                <section id="contact" class="contact-section">
                    <h2>{ t("contact.title") }</h2>
                    <ContactForm lang={lang} on_notify={handlers.notify.clone()} />
                </section>
            </main>
            <Toast toast={(*app_state.toast).clone()} />
            <ScrollTop />
            <WhatsappFab lang={lang} />
            <Footer lang={lang} />
        </>
    }
}
