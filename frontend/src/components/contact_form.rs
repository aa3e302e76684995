use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{ContactRequest, ServiceInterest};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let request = use_state(ContactRequest::default);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    let on_name = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            request.set(ContactRequest {
                name: input.value(),
                ..(*request).clone()
            });
        })
    };

    let on_email = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            request.set(ContactRequest {
                email: input.value(),
                ..(*request).clone()
            });
        })
    };

    let on_service = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            request.set(ContactRequest {
                service: ServiceInterest::from_value(&select.value()),
                ..(*request).clone()
            });
        })
    };

    let on_details = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            request.set(ContactRequest {
                details: textarea.value(),
                ..(*request).clone()
            });
        })
    };

    let on_submit = {
        let request = request.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match request.submit_with(config::open_in_new_tab) {
                Ok(()) => {
                    log::info!("Forwarded contact enquiry");
                    error.set(None);
                    sent.set(true);
                    request.set(ContactRequest::default());
                }
                // keep what the user typed so they can retry
                Err(err) => {
                    sent.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let selected = request.service.map(ServiceInterest::value).unwrap_or("");

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-row">
                <label>
                    <span>{"Your Name"}</span>
                    <input
                        type="text"
                        placeholder="John Doe"
                        value={request.name.clone()}
                        oninput={on_name}
                    />
                </label>
                <label>
                    <span>{"Email Address"}</span>
                    <input
                        type="email"
                        placeholder="john@example.com"
                        value={request.email.clone()}
                        oninput={on_email}
                    />
                </label>
            </div>
            <label>
                <span>{"Service Interest"}</span>
                <select onchange={on_service}>
                    <option value="" selected={selected.is_empty()}>{"Select Service"}</option>
                    { for ServiceInterest::ALL.into_iter().map(|interest| html! {
                        <option value={interest.value()} selected={selected == interest.value()}>
                            {interest.label()}
                        </option>
                    }) }
                </select>
            </label>
            <label>
                <span>{"Project Details"}</span>
                <textarea
                    rows="5"
                    placeholder="Tell us about your project goals, timeline, and any specific requirements..."
                    value={request.details.clone()}
                    oninput={on_details}
                />
            </label>
            {
                if let Some(message) = (*error).as_ref() {
                    html! { <p class="form-error">{message.clone()}</p> }
                } else if *sent {
                    html! { <p class="form-success">{"Thanks! Your message is ready to send on WhatsApp."}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="submit-button">{"Send Message"}</button>
        </form>
    }
}
