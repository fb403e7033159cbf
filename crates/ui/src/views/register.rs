use std::sync::Arc;

use dioxus::prelude::*;
use services::Registration;

use crate::context::AppContext;
use crate::toast::{self, Toast, ToastStack};

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let registration = ctx.registration();
    let hub = ctx.toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut branch = use_signal(String::new);
    let submitting = use_signal(|| false);
    let toasts = use_signal(Vec::<Toast>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = Arc::clone(&registration);
        let hub = Arc::clone(&hub);
        let mut submitting = submitting;
        let mut name = name;
        let mut email = email;
        let mut phone_number = phone_number;
        let mut college = college;
        let mut branch = branch;
        spawn(async move {
            submitting.set(true);
            let details = Registration {
                name: name(),
                email: email(),
                phone_number: phone_number(),
                college: college(),
                branch: branch(),
            };
            match registration.submit(&details).await {
                Ok(()) => {
                    hub.push("Details submitted successfully!");
                    name.set(String::new());
                    email.set(String::new());
                    phone_number.set(String::new());
                    college.set(String::new());
                    branch.set(String::new());
                }
                Err(err) => {
                    hub.push(format!("Submission failed: {err}"));
                }
            }
            submitting.set(false);
            for toast in hub.drain() {
                toast::show(toasts, toast);
            }
        });
    };

    rsx! {
        div { class: "page register-page",
            ToastStack { toasts: toasts() }
            header { class: "view-header",
                h2 { class: "view-title", "Register" }
                p { class: "view-subtitle", "Share your details and we'll keep you posted." }
            }
            form { class: "register-form", onsubmit: on_submit,
                label { class: "register-label", "Name"
                    input {
                        class: "register-input",
                        r#type: "text",
                        placeholder: "Your full name",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label { class: "register-label", "Email"
                    input {
                        class: "register-input",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "register-label", "Phone Number"
                    input {
                        class: "register-input",
                        r#type: "tel",
                        placeholder: "Phone number",
                        value: "{phone_number()}",
                        oninput: move |evt| phone_number.set(evt.value()),
                    }
                }
                label { class: "register-label", "College"
                    input {
                        class: "register-input",
                        r#type: "text",
                        placeholder: "Your college",
                        value: "{college()}",
                        oninput: move |evt| college.set(evt.value()),
                    }
                }
                label { class: "register-label", "Branch"
                    input {
                        class: "register-input",
                        r#type: "text",
                        placeholder: "Your branch",
                        value: "{branch()}",
                        oninput: move |evt| branch.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary register-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}
