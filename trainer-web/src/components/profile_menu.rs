use i18nrs::yew::use_translation;
use shared::models::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileMenuProps {
    pub session: Session,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Avatar and display name; clicking toggles a dropdown with the logout
/// action.
#[function_component(ProfileMenu)]
pub fn profile_menu(props: &ProfileMenuProps) -> Html {
    let (i18n, ..) = use_translation();
    let open = use_state_eq(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            open.set(!*open);
        })
    };

    let logout = {
        let open = open.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            open.set(false);
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
        })
    };

    let session = &props.session;
    html! {
        <div class="relative">
            <button class="btn btn-ghost gap-2" onclick={toggle}>
                <div class="avatar">
                    <div class="w-8 rounded-full">
                        <img src={session.avatar_url()} alt={session.display_name().to_string()} />
                    </div>
                </div>
                <span class="hidden sm:inline text-sm">{session.display_name()}</span>
            </button>
            if *open {
                <ul class="menu absolute right-0 z-[1] p-2 shadow bg-base-200 rounded-box w-52">
                    <li class="px-2 py-1 text-left">
                        <div class="text-sm font-semibold text-base-content">{session.display_name()}</div>
                        <div class="text-xs text-base-content/70">{&session.email}</div>
                    </li>
                    <div class="divider my-0"></div>
                    <li><a href="#" onclick={logout}>{i18n.t("header.logout")}</a></li>
                </ul>
            }
        </div>
    }
}
