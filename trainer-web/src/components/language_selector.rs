use i18nrs::yew::use_translation;
use yew::use_state_eq;
use yew::{Callback, function_component, html, use_effect_with};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language::{self, DEFAULT_LANGUAGE, remember_language};

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    {
        let language_state = language_state.clone();
        use_effect_with(i18n, move |i18n| {
            language_state.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_click = {
        let language_state = language_state.clone();
        Callback::from(move |value: String| {
            if *language_state == value {
                return;
            }
            tracing::debug!(language = %value, "switching language");
            remember_language(&value);
            language_state.set(value.clone());
            set_language.emit(value);
        })
    };

    let lang_code = &*language_state;
    let active = language::get_language_info(lang_code)
        .or_else(|| language::get_language_info(DEFAULT_LANGUAGE));
    let (active_flag, active_name) = active
        .as_ref()
        .map_or(("", ""), |info| (info.flag, info.native_name));
    let supported = language::supported_languages();
    // Korean first, then by native name.
    let mut languages: Vec<_> = supported.values().collect();
    languages.sort_by_key(|info| (info.code != DEFAULT_LANGUAGE, info.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1"
                title={active_name} aria-label={active_name}>
                <span>{active_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for languages.into_iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == lang_code.as_str()}
                            info={info.clone()}
                            on_click={on_click.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
