use leptos::*;

use crate::models::UserType;

/// Tariff picker shared by both bill cards
#[component]
pub fn UserTypeSelect(
    id: &'static str,
    value: ReadSignal<UserType>,
    set_value: WriteSignal<UserType>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        if let Some(user_type) = UserType::from_key(&event_target_value(&ev)) {
            set_value.set(user_type);
        }
    };

    view! {
        <select id=id on:change=on_change>
            {UserType::ALL
                .into_iter()
                .map(|user_type| {
                    view! {
                        <option
                            value=user_type.as_str()
                            prop:selected=move || { value.get() == user_type }
                        >
                            {user_type.display_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
