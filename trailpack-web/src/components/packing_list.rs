//! The packing-list view: filters, grouped checklist, custom items,
//! progress, and the pack-size advisory.
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::planner::{AdvisoryConfig, GearItem, ListFilter, Planner, ViewMode};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub planner: Planner,
    pub filter: ListFilter,
    pub on_filter_change: Callback<ListFilter>,
    pub on_toggle: Callback<String>,
    pub on_remove: Callback<String>,
    /// (name, category, quantity) for a new custom item.
    pub on_add_custom: Callback<(String, String, u32)>,
    pub on_save: Callback<()>,
    pub on_edit_trip: Callback<()>,
}

#[function_component(PackingList)]
pub fn packing_list(props: &Props) -> Html {
    let new_name = use_state(String::new);
    let new_category = use_state(|| "Custom".to_string());
    let new_quantity = use_state(|| 1u32);
    let collapsed: UseStateHandle<Vec<String>> = use_state(Vec::new);

    let filter = &props.filter;
    let planner = &props.planner;
    let visible = planner.visible_items(filter);
    let progress = planner.progress(filter);
    let pack_label = planner
        .recommended_pack(filter, &AdvisoryConfig::default())
        .label();
    let distributing = planner.trip.distribute_gear && planner.trip.number_of_people > 1;

    let on_search = {
        let filter = filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = filter.clone();
            next.search = input.value();
            on_filter_change.emit(next);
        })
    };
    let on_category = {
        let filter = filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filter.clone();
            let value = select.value();
            next.category = if value.is_empty() { None } else { Some(value) };
            on_filter_change.emit(next);
        })
    };
    let on_essential = {
        let filter = filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = filter.clone();
            next.essential_only = input.checked();
            on_filter_change.emit(next);
        })
    };
    let set_view = |mode: ViewMode| {
        let filter = filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = filter.clone();
            next.view_mode = mode;
            if mode == ViewMode::ByPerson && next.person.is_none() {
                next.person = Some(1);
            }
            on_filter_change.emit(next);
        })
    };
    let on_person = {
        let filter = filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filter.clone();
            next.person = select.value().parse().ok();
            on_filter_change.emit(next);
        })
    };

    let on_add = {
        let new_name = new_name.clone();
        let new_category = new_category.clone();
        let new_quantity = new_quantity.clone();
        let on_add_custom = props.on_add_custom.clone();
        Callback::from(move |_: MouseEvent| {
            if new_name.trim().is_empty() {
                return;
            }
            on_add_custom.emit((
                (*new_name).clone(),
                (*new_category).clone(),
                *new_quantity,
            ));
            new_name.set(String::new());
            new_quantity.set(1);
        })
    };
    let on_new_name = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };
    let on_new_category = {
        let new_category = new_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            new_category.set(select.value());
        })
    };
    let on_new_quantity = {
        let new_quantity = new_quantity.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_quantity.set(input.value().parse().unwrap_or(1).max(1));
        })
    };

    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };
    let on_edit_trip = {
        let on_edit_trip = props.on_edit_trip.clone();
        Callback::from(move |_: MouseEvent| on_edit_trip.emit(()))
    };

    // Group the visible items by category, preserving list order.
    let mut groups: Vec<(String, Vec<&GearItem>)> = Vec::new();
    for &item in &visible {
        match groups.iter_mut().find(|(c, _)| c == &item.category) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((item.category.clone(), vec![item])),
        }
    }

    let render_item = |item: &GearItem| -> Html {
        let on_toggle = {
            let on_toggle = props.on_toggle.clone();
            let id = item.id.clone();
            Callback::from(move |_: Event| on_toggle.emit(id.clone()))
        };
        let on_remove = {
            let on_remove = props.on_remove.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
        };
        html! {
            <li class={classes!("gear-item", item.is_checked.then_some("checked"))}>
                <label>
                    <input type="checkbox" checked={item.is_checked} onchange={on_toggle} />
                    <span class="item-name">{ item.name.clone() }</span>
                    if item.quantity > 1 {
                        <span class="item-quantity">{ format!("×{}", item.quantity) }</span>
                    }
                    if item.is_essential {
                        <span class="badge essential">{ "Essential" }</span>
                    }
                    if let Some(person) = item.assigned_to {
                        <span class="badge person">{ format!("Person {person}") }</span>
                    }
                </label>
                <button class="remove" onclick={on_remove}>{ "Remove" }</button>
            </li>
        }
    };

    html! {
        <section class="packing-list">
            <h2>{ "Your Packing List" }</h2>

            <div class="advisory">
                <span>{ "Recommended pack: " }</span>
                <strong>{ pack_label }</strong>
            </div>

            <div class="progress">
                { format!("{} of {} packed", progress.checked, progress.total) }
            </div>

            if distributing {
                <nav class="view-tabs">
                    <button onclick={set_view(ViewMode::All)}>{ "All Items" }</button>
                    <button onclick={set_view(ViewMode::ByPerson)}>{ "By Person" }</button>
                    <button onclick={set_view(ViewMode::Distribution)}>{ "Distribution" }</button>
                </nav>
                if filter.view_mode == ViewMode::ByPerson {
                    <select class="person-select" onchange={on_person}>
                        { for (1..=planner.trip.number_of_people).map(|p| html! {
                            <option value={p.to_string()} selected={filter.person == Some(p)}>
                                { format!("Person {p}") }
                            </option>
                        }) }
                    </select>
                }
            }

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search items"
                    value={filter.search.clone()}
                    oninput={on_search}
                />
                <select onchange={on_category}>
                    <option value="" selected={filter.category.is_none()}>
                        { "All categories" }
                    </option>
                    { for planner.categories().into_iter().map(|category| html! {
                        <option
                            value={category.clone()}
                            selected={filter.category.as_deref() == Some(category.as_str())}
                        >
                            { category.clone() }
                        </option>
                    }) }
                </select>
                <label>
                    <input
                        type="checkbox"
                        checked={filter.essential_only}
                        onchange={on_essential}
                    />
                    { "Essentials only" }
                </label>
            </div>

            if planner.items.is_empty() {
                <p class="empty-state">{ "Your packing list is empty. Generate one from your trip details." }</p>
            } else if visible.is_empty() {
                <p class="empty-state">{ "No items match the current filters." }</p>
            } else {
                { for groups.iter().map(|(category, bucket)| {
                    let is_collapsed = collapsed.contains(category);
                    let on_collapse = {
                        let collapsed = collapsed.clone();
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*collapsed).clone();
                            if let Some(pos) = next.iter().position(|c| c == &category) {
                                next.remove(pos);
                            } else {
                                next.push(category.clone());
                            }
                            collapsed.set(next);
                        })
                    };
                    html! {
                        <div class="category-group">
                            <h3>
                                <button class="collapse-toggle" onclick={on_collapse}>
                                    { if is_collapsed { "▸ " } else { "▾ " } }
                                    { category.clone() }
                                    { format!(" ({})", bucket.len()) }
                                </button>
                            </h3>
                            if !is_collapsed {
                                <ul>
                                    { for bucket.iter().map(|item| render_item(item)) }
                                </ul>
                            }
                        </div>
                    }
                }) }
            }

            <div class="add-custom">
                <h3>{ "Add your own item" }</h3>
                <input
                    type="text"
                    placeholder="Item name"
                    value={(*new_name).clone()}
                    oninput={on_new_name}
                />
                <select onchange={on_new_category}>
                    { for planner.categories().into_iter().map(|category| html! {
                        <option
                            value={category.clone()}
                            selected={*new_category == category}
                        >
                            { category.clone() }
                        </option>
                    }) }
                </select>
                <input
                    type="number"
                    min="1"
                    value={new_quantity.to_string()}
                    onchange={on_new_quantity}
                />
                <button onclick={on_add} disabled={new_name.trim().is_empty()}>
                    { "Add Item" }
                </button>
            </div>

            <div class="list-actions">
                <button onclick={on_edit_trip}>{ "Edit Trip" }</button>
                <button onclick={on_save}>{ "Save List" }</button>
            </div>
        </section>
    }
}
