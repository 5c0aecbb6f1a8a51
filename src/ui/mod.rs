//! Registration modal
//!
//! A DOM form collecting name/username/password. Validation and storage
//! live in `users`; this module is only the modal glue.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement};

use crate::platform::LocalStorage;
use crate::users;

const MODAL_ID: &str = "reg-modal";

fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Build and show the registration modal
///
/// `on_registered` receives the new username after a successful submit (the
/// shell uses it to tag the running game state).
pub fn open_registration(on_registered: impl Fn(String) + 'static) -> Result<(), JsValue> {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    if document.get_element_by_id(MODAL_ID).is_some() {
        return Ok(());
    }

    let modal = document.create_element("div")?;
    modal.set_id(MODAL_ID);
    modal.set_attribute(
        "style",
        "position: fixed; z-index: 1; left: 50%; top: 50%; \
         transform: translate(-50%, -50%); background-color: #fefefe; \
         padding: 20px; border: 1px solid #888; border-radius: 5px;",
    )?;
    modal.set_inner_html(
        "<div style=\"display: flex; flex-direction: column; gap: 10px;\">\
         <div>Enter your name: <input id=\"reg-name\" type=\"text\"></div>\
         <div>Enter your username: <input id=\"reg-username\" type=\"text\"></div>\
         <div>Enter your password: <input id=\"reg-password\" type=\"password\"></div>\
         <button id=\"reg-submit\">Register</button>\
         <button id=\"reg-close\">Close</button>\
         </div>",
    );
    document.body().expect("no body").append_child(&modal)?;

    // Submit
    {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");

            let name = input_value(&document, "reg-name");
            let username = input_value(&document, "reg-username");
            let password = input_value(&document, "reg-password");
            let date_joined = String::from(js_sys::Date::new_0().to_iso_string());

            let Some(mut store) = LocalStorage::open() else {
                let _ = window.alert_with_message("Storage unavailable");
                return;
            };

            match users::register(&mut store, &name, &username, &password, &date_joined) {
                Ok(()) => {
                    let _ = window.alert_with_message("Registration successful!");
                    on_registered(username);
                    close_registration();
                }
                Err(err) => {
                    let _ = window.alert_with_message(&err.to_string());
                }
            }
        });
        document
            .get_element_by_id("reg-submit")
            .expect("no submit button")
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Close
    {
        let closure = Closure::<dyn FnMut()>::new(close_registration);
        document
            .get_element_by_id("reg-close")
            .expect("no close button")
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Remove the modal from the DOM, if present
pub fn close_registration() {
    let modal = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MODAL_ID));
    if let Some(modal) = modal {
        modal.remove();
    }
}
