use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::toast::ToastKind;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: String,
    pub kind: ToastKind,
    pub fade_ms: u32,
}

pub enum ToastMsg {
    FadeIn,
    FadeOut,
}

/// The toast overlay. Mounted into its own host element under `<body>`;
/// the page fades it out by message before tearing the app down.
pub struct ToastView {
    visible: bool,
    fade_in: Option<Timeout>,
}

impl Component for ToastView {
    type Message = ToastMsg;
    type Properties = ToastProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            visible: false,
            fade_in: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // Start transparent for one frame so the opacity transition runs
            let link = ctx.link().clone();
            self.fade_in = Some(Timeout::new(0, move || link.send_message(ToastMsg::FadeIn)));
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ToastMsg::FadeIn => {
                self.fade_in = None;
                self.visible = true;
            }
            ToastMsg::FadeOut => {
                self.fade_in = None;
                self.visible = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ToastProps { message, kind, fade_ms } = ctx.props();

        let style = format!(
            "position: fixed; bottom: 100px; left: 50%; transform: translateX(-50%); \
             padding: 12px 24px; border-radius: 12px; font-size: 14px; font-weight: 500; \
             z-index: 9999; opacity: {}; transition: opacity {}ms ease; background: {}; color: {};",
            if self.visible { "1" } else { "0" },
            fade_ms,
            kind.background(),
            kind.foreground(),
        );

        html! {
            <div class={kind.class()} role="alert" aria-live="polite" style={style}>
                { message.clone() }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use yew::ServerRenderer;

    async fn render(kind: ToastKind) -> String {
        ServerRenderer::<ToastView>::with_props(move || ToastProps {
            message: "Saved".to_string(),
            kind,
            fade_ms: 200,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[rstest]
    #[case(ToastKind::Info, "toast toast-info")]
    #[case(ToastKind::Success, "toast toast-success")]
    #[case(ToastKind::Error, "toast toast-error")]
    #[tokio::test]
    async fn renders_an_accessible_alert(#[case] kind: ToastKind, #[case] class: &str) {
        let html = render(kind).await;

        assert!(html.contains(&format!(r#"class="{}""#, class)), "{}", html);
        assert!(html.contains(r#"role="alert""#), "{}", html);
        assert!(html.contains(r#"aria-live="polite""#), "{}", html);
        assert!(html.contains(&format!("background: {};", kind.background())), "{}", html);
        assert!(html.contains(&format!("color: {};", kind.foreground())), "{}", html);
        assert!(html.contains(">Saved</div>"), "{}", html);
    }

    #[tokio::test]
    async fn starts_transparent_until_faded_in() {
        let html = render(ToastKind::Info).await;
        assert!(html.contains("opacity: 0;"), "{}", html);
        assert!(html.contains("transition: opacity 200ms ease;"), "{}", html);
    }
}
