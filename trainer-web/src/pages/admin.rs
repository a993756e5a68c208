use crate::api::{client, error_text, settle};
use crate::components::UploadForm;
use i18nrs::yew::use_translation;
use shared::ClientError;
use shared::models::{CategoryFilter, Video};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Upload form and a list of videos with delete buttons. Admins only.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let (i18n, _) = use_translation();
    let videos = use_state(Vec::<Video>::new);
    let reload = use_state(|| 0_u32);
    let error = use_state(|| None::<Rc<ClientError>>);

    {
        let videos = videos.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let listed = client().videos(&CategoryFilter::All).await;
                let (list, load_error) = settle(listed, "videos");
                videos.set(list);
                error.set(load_error);
            });
            || ()
        });
    }

    let on_uploaded = {
        let reload = reload.clone();
        Callback::from(move |_: Video| reload.set(*reload + 1))
    };

    let on_delete = {
        let reload = reload.clone();
        let error = error.clone();
        let prompt = i18n.t("admin.list.confirm");
        Callback::from(move |id: String| {
            if !confirm(&prompt) {
                return;
            }
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                match client().delete_video(&id).await {
                    Ok(()) => {
                        tracing::info!(%id, "video deleted");
                        error.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, %id, "delete failed");
                        error.set(Some(Rc::new(err)));
                    }
                }
            });
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("admin.title") }</h1>
            <UploadForm {on_uploaded} />
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("admin.list.title") }</h2>
                    if let Some(err) = &*error {
                        <div class="alert alert-error">
                            <span>{ error_text(err, |key| i18n.t(key)) }</span>
                        </div>
                    }
                    if videos.is_empty() {
                        <p class="text-base-content/70">{ i18n.t("admin.list.empty") }</p>
                    } else {
                        <ul class="divide-y divide-base-300">
                            { for videos.iter().map(|video| {
                                let id = video.id.clone();
                                let on_delete = on_delete.clone();
                                html! {
                                    <li key={video.id.clone()} class="flex items-center justify-between py-2">
                                        <div>
                                            <div class="font-semibold">{ &video.title }</div>
                                            <div class="text-xs text-base-content/70">
                                                { format!("{} · {}", video.category.as_deref().unwrap_or("-"), video.duration_label()) }
                                            </div>
                                        </div>
                                        <button
                                            class="btn btn-error btn-sm"
                                            onclick={move |_: MouseEvent| on_delete.emit(id.clone())}
                                        >
                                            { i18n.t("admin.list.delete") }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}
