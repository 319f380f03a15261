use crate::{
    download::ObjectUrl,
    presenter::{self, FormState, QrRequest, RenderResult, Submission},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;
use yew::prelude::*;

pub struct Main {
    link: ComponentLink<Self>,
    text: String,
    format: String,
    form: FormState<ObjectUrl>,
}

pub enum Msg {
    SetText(String),
    SetFormat(String),
    Generate,
    Ignore,
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(text) = err.as_string() {
        text
    } else {
        format!("{:?}", err)
    }
}

impl Main {
    fn generate(&mut self) {
        let request = QrRequest::new(self.text.clone(), self.format.clone());
        let submission = self.form.submit(request, |artifact| {
            ObjectUrl::from_artifact(artifact).map_err(|err| js_error_message(&err))
        });

        match (&submission.result, &submission.published) {
            (RenderResult::Success(artifact), Some(_)) => console::log_2(
                &JsValue::from_str("Generated QR code:"),
                &JsValue::from_str(&artifact.file_name),
            ),
            (result, _) => console::error_2(
                &JsValue::from_str("Failed generating QR code:"),
                &JsValue::from_str(result.status_message()),
            ),
        }
    }

    fn view_result(&self) -> Html {
        match self.form.current() {
            Some(Submission {
                text,
                result: RenderResult::Success(_),
                published: Some(object_url),
            }) => html! {
                <div class="result">
                    <div class="success">{ presenter::SUCCESS_MESSAGE }</div>
                    <img class="qr" src=object_url.url().to_owned() alt=text.clone() />
                    <a class="download" href=object_url.url().to_owned() download=object_url.file_name().to_owned()>
                        { presenter::DOWNLOAD_LABEL }
                    </a>
                </div>
            },
            Some(Submission { result, .. }) => html! {
                <div class="result">
                    <div class="error">{ result.status_message() }</div>
                    <div class="error">{ presenter::FAILURE_MESSAGE }</div>
                </div>
            },
            None => html! {},
        }
    }
}

impl Component for Main {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        Self {
            link,
            text: String::new(),
            format: presenter::default_format(),
            form: FormState::default(),
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::SetText(text) => {
                self.text = text;
                false
            }
            Msg::SetFormat(format) => {
                self.format = format;
                false
            }
            Msg::Generate => {
                self.generate();
                true
            }
            Msg::Ignore => false,
        }
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html! {
            <div>
                <header>
                    <h1>{ presenter::TITLE }</h1>
                </header>
                <label for="qr-text">{ presenter::TEXT_LABEL }</label>
                <input
                    id="qr-text"
                    type="text"
                    value=self.text.clone()
                    oninput=self.link.callback(|e: InputData| Msg::SetText(e.value))
                />
                <label for="qr-format">{ presenter::FORMAT_LABEL }</label>
                <select
                    id="qr-format"
                    onchange=self.link.callback(|e: ChangeData| match e {
                        ChangeData::Select(select) => Msg::SetFormat(select.value()),
                        ChangeData::Value(value) => Msg::SetFormat(value),
                        ChangeData::Files(_) => Msg::Ignore,
                    })
                >
                    {
                        for presenter::format_options().map(|label| html! {
                            <option value=label selected={ label == self.format }>{ label }</option>
                        })
                    }
                </select>
                <button onclick=self.link.callback(|_| Msg::Generate)>{ presenter::GENERATE_LABEL }</button>
                { self.view_result() }
            </div>
        }
    }
}
