use nileway_core::gallery::scatter_layout;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Default photo set; cards past the scatter table keep their stylesheet
/// position.
pub const GALLERY_IMAGES: [&str; 8] = [
    "assets/gallery/pyramids.jpg",
    "assets/gallery/nile-felucca.jpg",
    "assets/gallery/luxor-temple.jpg",
    "assets/gallery/red-sea.jpg",
    "assets/gallery/desert-camp.jpg",
    "assets/gallery/abu-simbel.jpg",
    "assets/gallery/cairo-bazaar.jpg",
    "assets/gallery/aswan-sunset.jpg",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub images: Vec<AttrValue>,
    pub overlay_open: bool,
    pub active_card: Option<usize>,
    /// Centered transform for the active card, while the viewer is open.
    pub card_transform: Option<AttrValue>,
    pub on_card_click: Callback<(usize, MouseEvent)>,
    pub on_overlay_click: Callback<()>,
}

fn card_style(index: usize, active: bool, transform: Option<&AttrValue>) -> Option<String> {
    let layout = scatter_layout(index);
    match (layout, active, transform) {
        (Some(layout), true, Some(transform)) => {
            Some(format!("{};transform:{transform}", layout.placement(index)))
        }
        (Some(layout), ..) => Some(layout.style(index)),
        (None, true, Some(transform)) => Some(format!("transform:{transform}")),
        (None, ..) => None,
    }
}

#[function_component(Gallery)]
pub fn gallery(p: &Props) -> Html {
    let overlay_click = {
        let cb = p.on_overlay_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="gallery-container">
            <div
                id="gallery-overlay"
                class={classes!("gallery-overlay", p.overlay_open.then_some("active"))}
                onclick={overlay_click}>
            </div>
            { for p.images.iter().enumerate().map(|(index, src)| {
                let active = p.active_card == Some(index);
                let style = card_style(index, active, p.card_transform.as_ref());
                let onclick = {
                    let cb = p.on_card_click.clone();
                    Callback::from(move |e: MouseEvent| cb.emit((index, e)))
                };
                html! {
                    <div
                        key={index}
                        class={classes!("photo-card", active.then_some("is-active"))}
                        style={style}
                        onclick={onclick}>
                        <img src={src.clone()} alt="" loading="lazy" />
                    </div>
                }
            }) }
        </div>
    }
}
