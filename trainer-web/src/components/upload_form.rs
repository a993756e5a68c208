use crate::api::{client, error_text};
use i18nrs::yew::use_translation;
use shared::ClientError;
use shared::models::{ALL_CATEGORIES, DEFAULT_DURATION, NewVideo, UploadFile, Video, categories};
use std::rc::Rc;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub on_uploaded: Callback<Video>,
}

async fn read_file(file: File) -> Result<UploadFile, ClientError> {
    let file_name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| ClientError::File {
            name: file_name.clone(),
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        })?;
    Ok(UploadFile {
        file_name,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Put the picked file on the form. A file that could not be read stops the
/// upload instead of sending the form without it.
fn attach(
    mut form: NewVideo,
    picked: Option<Result<UploadFile, ClientError>>,
) -> Result<NewVideo, ClientError> {
    if let Some(upload) = picked {
        form.file = Some(upload?);
    }
    Ok(form)
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
}

/// Admin form for `POST /videos`.
#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let title = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(|| "required".to_string());
    let duration = use_state(|| DEFAULT_DURATION.to_string());
    let thumbnail = use_state(String::new);
    let file_input = use_node_ref();
    let busy = use_state(|| false);
    let outcome = use_state(|| None::<Result<(), Rc<ClientError>>>);

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                handle.set(value);
            }
        })
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category.set(select.value());
            }
        })
    };

    let onsubmit = {
        let fields = (
            title.clone(),
            description.clone(),
            category.clone(),
            duration.clone(),
            thumbnail.clone(),
        );
        let file_input = file_input.clone();
        let busy = busy.clone();
        let outcome = outcome.clone();
        let on_uploaded = props.on_uploaded.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (title, description, category, duration, thumbnail) = fields.clone();
            let mut form = NewVideo::new((*title).clone(), (*category).clone());
            form.description = (*description).clone();
            form.duration = (*duration).clone();
            form.thumbnail = (*thumbnail).clone();
            let selected = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            busy.set(true);
            outcome.set(None);
            let busy = busy.clone();
            let outcome = outcome.clone();
            let on_uploaded = on_uploaded.clone();
            spawn_local(async move {
                let picked = match selected {
                    Some(file) => Some(read_file(file).await),
                    None => None,
                };
                let form = match attach(form, picked) {
                    Ok(form) => form,
                    Err(err) => {
                        tracing::warn!(error = %err, "upload cancelled");
                        outcome.set(Some(Err(Rc::new(err))));
                        busy.set(false);
                        return;
                    }
                };
                match client().add_video(form).await {
                    Ok(video) => {
                        tracing::info!(id = %video.id, "video uploaded");
                        title.set(String::new());
                        description.set(String::new());
                        thumbnail.set(String::new());
                        outcome.set(Some(Ok(())));
                        on_uploaded.emit(video);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "upload failed");
                        outcome.set(Some(Err(Rc::new(err))));
                    }
                }
                busy.set(false);
            });
        })
    };

    let options = categories()
        .into_iter()
        .filter(|option| option.id != ALL_CATEGORIES)
        .map(|option| {
            let selected = option.id == *category;
            let label = i18n.t(&format!("categories.{}", option.id));
            html! { <option value={option.id} selected={selected}>{label}</option> }
        })
        .collect::<Html>();

    let is_busy = *busy;
    html! {
        <form class="card bg-base-200 shadow-xl card-body space-y-2" {onsubmit}>
            <h2 class="card-title">{i18n.t("admin.upload.title")}</h2>
            {
                match &*outcome {
                    Some(Ok(())) => html! {
                        <div class="alert alert-success"><span>{i18n.t("admin.upload.success")}</span></div>
                    },
                    Some(Err(err)) => html! {
                        <div class="alert alert-error"><span>{error_text(err, |key| i18n.t(key))}</span></div>
                    },
                    None => html! {},
                }
            }
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.title_label")}</span>
                <input class="input input-bordered" type="text" required=true
                    value={(*title).clone()} oninput={bind(&title)} />
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.description")}</span>
                <textarea class="textarea textarea-bordered"
                    value={(*description).clone()} oninput={bind(&description)} />
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.category")}</span>
                <select class="select select-bordered" onchange={on_category}>
                    {options}
                </select>
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.duration")}</span>
                <input class="input input-bordered" type="text"
                    value={(*duration).clone()} oninput={bind(&duration)} />
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.thumbnail")}</span>
                <input class="input input-bordered" type="url"
                    value={(*thumbnail).clone()} oninput={bind(&thumbnail)} />
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("admin.upload.file")}</span>
                <input class="file-input file-input-bordered" type="file" accept="video/*" ref={file_input} />
            </label>
            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                {if is_busy { i18n.t("admin.upload.submitting") } else { i18n.t("admin.upload.submit") }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewVideo {
        NewVideo::new("면접 기본 자세", "required")
    }

    #[test]
    fn readable_file_is_attached() {
        let upload = UploadFile {
            file_name: "intro.mp4".to_string(),
            bytes: vec![0, 1, 2],
        };
        let attached = attach(form(), Some(Ok(upload.clone()))).unwrap();
        assert_eq!(attached.file, Some(upload));
    }

    #[test]
    fn unreadable_file_stops_the_upload() {
        let err = attach(
            form(),
            Some(Err(ClientError::File {
                name: "intro.mp4".to_string(),
                reason: "NotReadableError".to_string(),
            })),
        )
        .unwrap_err();
        assert_eq!(err.message_key(), "errors.file_unreadable");
    }

    #[test]
    fn form_without_file_is_sent_as_is() {
        assert_eq!(attach(form(), None).unwrap(), form());
    }
}
