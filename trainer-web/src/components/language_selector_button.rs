use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<String>,
}

/// One entry of the language dropdown. The active entry is marked and shows
/// a check instead of reacting to clicks.
#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let LanguageSelectorButtonProps {
        is_active,
        info,
        on_click,
    } = props;
    let onclick = {
        let code = info.code.to_string();
        let on_click = on_click.clone();
        let is_active = *is_active;
        move |event: MouseEvent| {
            event.prevent_default();
            if !is_active {
                on_click.emit(code.clone());
            }
        }
    };
    html! {
        <li>
            <a class={classes!(is_active.then_some("active"))} lang={info.code}
                aria-current={is_active.then_some("true")} {onclick}>
                <span>{info.flag}</span>
                <span class="flex-1">{info.native_name}</span>
                if *is_active {
                    <span class="text-xs">{"✓"}</span>
                }
            </a>
        </li>
    }
}
