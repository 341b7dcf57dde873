//! Чекбокс с тремя состояниями для иерархических фильтров
//!
//! # Пример
//!
//! ```ignore
//! <TriStateCheckbox
//!     label=option.label
//!     checked=option.selected
//!     indeterminate=option.indeterminate
//!     on_toggle=Callback::new(move |_| handle.toggle(level, &value))
//! />
//! ```

use leptos::prelude::*;

/// Чекбокс с меткой
///
/// - `checked` и `indeterminate` приходят из движка фильтра
/// - indeterminate выставляется через DOM-свойство, атрибута у него нет
/// - клик не меняет состояние сам, а только вызывает `on_toggle`
#[component]
pub fn TriStateCheckbox(
    /// Текст метки
    #[prop(into)]
    label: String,

    /// Все дочерние значения выбраны
    #[prop(into)]
    checked: Signal<bool>,

    /// Часть дочерних значений выбрана
    #[prop(into)]
    indeterminate: Signal<bool>,

    /// Вызывается при клике
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let is_indeterminate = indeterminate.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    let item_class = move || {
        if checked.get() {
            "tri-checkbox tri-checkbox--checked"
        } else if indeterminate.get() {
            "tri-checkbox tri-checkbox--partial"
        } else {
            "tri-checkbox"
        }
    };

    let title = label.clone();
    view! {
        <label class=item_class title=title>
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="tri-checkbox__input"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class="tri-checkbox__label">{label}</span>
        </label>
    }
}
