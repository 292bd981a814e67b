use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlFormElement};
use yew::prelude::*;
use yew::AppHandle;

pub const FORM_MESSAGE_ID: &str = "form-message";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub kind: MessageKind,
    pub lines: Vec<String>,
    #[prop_or(5_000)]
    pub visible_ms: u32,
    #[prop_or(400)]
    pub exit_ms: u32,
    pub on_done: Callback<()>,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.setter();
        let on_done = props.on_done.clone();
        let visible_ms = props.visible_ms;
        let exit_ms = props.exit_ms;
        use_effect_with_deps(
            move |_| {
                let hide = Timeout::new(visible_ms, move || leaving.set(true));
                let remove = Timeout::new(visible_ms + exit_ms, move || on_done.emit(()));
                move || {
                    drop(hide);
                    drop(remove);
                }
            },
            (),
        );
    }

    let colors = match props.kind {
        MessageKind::Success => "background: #d1fae5; color: #065f46; border-left: 4px solid #10b981;",
        MessageKind::Error => "background: #fee2e2; color: #991b1b; border-left: 4px solid #ef4444;",
    };
    let animation = if *leaving { "slideOutUp" } else { "slideInDown" };
    let style = format!(
        "padding: 15px 20px; margin: 20px 0; border-radius: 8px; font-weight: 500; animation: {} 0.4s ease-out; {}",
        animation, colors
    );
    let kind_class = match props.kind {
        MessageKind::Success => "success",
        MessageKind::Error => "error",
    };

    html! {
        <div class={classes!("form-message", kind_class)} style={style} role="status">
            {
                for props.lines.iter().map(|line| html! {
                    <p style="margin: 0;">{ line.clone() }</p>
                })
            }
        </div>
    }
}

struct Shown {
    app: AppHandle<FormMessage>,
    host: Element,
}

/// The message currently shown above a form, if any.
#[derive(Clone, Default)]
pub struct MessageSlot(Rc<RefCell<Option<Shown>>>);

impl MessageSlot {
    /// Unmounts the current message and removes its host element.
    pub fn clear(&self) {
        let shown = self.0.borrow_mut().take();
        if let Some(Shown { app, host }) = shown {
            app.destroy();
            host.remove();
        }
    }

    fn clear_if_showing(&self, host: &Element) {
        let showing = matches!(&*self.0.borrow(), Some(shown) if shown.host == *host);
        if showing {
            self.clear();
        }
    }
}

/// Shows `lines` right above `form`, replacing any message still in `slot`.
pub fn show(
    form: &HtmlFormElement,
    slot: &MessageSlot,
    kind: MessageKind,
    lines: Vec<String>,
    visible_ms: u32,
    exit_ms: u32,
) -> Result<(), JsValue> {
    let document = form
        .owner_document()
        .ok_or_else(|| JsValue::from_str("form is not attached to a document"))?;
    slot.clear();

    let host = document.create_element("div")?;
    host.set_id(FORM_MESSAGE_ID);
    form.insert_adjacent_element("beforebegin", &host)?;

    let on_done = {
        let slot = slot.clone();
        let host = host.clone();
        Callback::from(move |_: ()| slot.clear_if_showing(&host))
    };
    let props = FormMessageProps {
        kind,
        lines,
        visible_ms,
        exit_ms,
        on_done,
    };
    let app = yew::Renderer::<FormMessage>::with_root_and_props(host.clone(), props).render();
    *slot.0.borrow_mut() = Some(Shown { app, host });
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::testing::next_tick;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form() -> HtmlFormElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&form).unwrap();
        form
    }

    #[wasm_bindgen_test]
    async fn new_message_replaces_the_old_one() {
        let form = form();
        let document = form.owner_document().unwrap();
        let slot = MessageSlot::default();

        show(&form, &slot, MessageKind::Error, vec!["first".to_string()], 5_000, 400).unwrap();
        next_tick().await;
        let first_host = document.get_element_by_id(FORM_MESSAGE_ID).unwrap();

        show(&form, &slot, MessageKind::Success, vec!["second".to_string()], 5_000, 400).unwrap();
        next_tick().await;

        assert!(!first_host.is_connected());
        assert_eq!(document.query_selector_all(".form-message").unwrap().length(), 1);
        let message = document.query_selector(".form-message").unwrap().unwrap();
        assert_eq!(message.text_content().as_deref(), Some("second"));
        assert!(message.class_list().contains("success"));

        slot.clear();
        assert!(document.get_element_by_id(FORM_MESSAGE_ID).is_none());
        form.remove();
    }

    #[wasm_bindgen_test]
    async fn message_removes_itself_after_its_timeouts() {
        let form = form();
        let document = form.owner_document().unwrap();
        let slot = MessageSlot::default();

        show(&form, &slot, MessageKind::Error, vec!["bad".to_string()], 10, 10).unwrap();
        gloo_timers::future::TimeoutFuture::new(60).await;

        assert!(document.get_element_by_id(FORM_MESSAGE_ID).is_none());
        form.remove();
    }
}
