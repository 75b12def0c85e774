//! Drag-and-drop board for spreading gear across the party.
//!
//! One column holds shared (unassigned) gear, plus one column per
//! person. The id of the item being dragged is held in component state;
//! dropping on a column reassigns it through the `on_assign` callback.
use web_sys::DragEvent;
use yew::prelude::*;

use crate::planner::{GearItem, Planner};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub planner: Planner,
    /// (item id, target person or `None` for the shared column).
    pub on_assign: Callback<(String, Option<u32>)>,
    pub on_auto_balance: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component(DistributionBoard)]
pub fn distribution_board(props: &Props) -> Html {
    let dragged: UseStateHandle<Option<String>> = use_state(|| None);

    let planner = &props.planner;
    let people = planner.trip.number_of_people;
    let counts = planner.carried_counts();

    let on_auto_balance = {
        let on_auto_balance = props.on_auto_balance.clone();
        Callback::from(move |_: MouseEvent| on_auto_balance.emit(()))
    };
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    let drop_on = |target: Option<u32>| -> Callback<DragEvent> {
        let dragged = dragged.clone();
        let on_assign = props.on_assign.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if let Some(id) = (*dragged).clone() {
                on_assign.emit((id, target));
                dragged.set(None);
            }
        })
    };
    let allow_drop = Callback::from(|e: DragEvent| e.prevent_default());

    let render_item = |item: &GearItem| -> Html {
        let on_drag_start = {
            let dragged = dragged.clone();
            let id = item.id.clone();
            Callback::from(move |_: DragEvent| dragged.set(Some(id.clone())))
        };
        html! {
            <li class="board-item" draggable="true" ondragstart={on_drag_start}>
                <span>{ item.name.clone() }</span>
                if item.quantity > 1 {
                    <span class="item-quantity">{ format!("×{}", item.quantity) }</span>
                }
            </li>
        }
    };

    let shared: Vec<&GearItem> = planner
        .items
        .iter()
        .filter(|i| i.assigned_to.is_none())
        .collect();

    html! {
        <section class="distribution-board">
            <h2>{ "Gear Distribution" }</h2>
            <p class="board-hint">{ "Drag items between columns, or let auto-balance spread the load." }</p>

            <div class="board-columns">
                <div
                    class="board-column shared"
                    ondragover={allow_drop.clone()}
                    ondrop={drop_on(None)}
                >
                    <h3>{ format!("Shared Gear ({})", shared.len()) }</h3>
                    <ul>
                        { for shared.iter().map(|item| render_item(item)) }
                    </ul>
                </div>

                { for (1..=people).map(|person| {
                    let carried: Vec<&GearItem> = planner
                        .items
                        .iter()
                        .filter(|i| i.assigned_to == Some(person))
                        .collect();
                    let count = counts.get(person as usize - 1).copied().unwrap_or(0);
                    let summary = planner.person_summary(person);
                    html! {
                        <div
                            class="board-column person"
                            ondragover={allow_drop.clone()}
                            ondrop={drop_on(Some(person))}
                        >
                            <h3>{ format!("Person {person} ({count} items)") }</h3>
                            <ul>
                                { for carried.iter().map(|item| render_item(item)) }
                            </ul>
                            <p class="column-summary">
                                { format!("{} essential", summary.essential) }
                            </p>
                        </div>
                    }
                }) }
            </div>

            <div class="board-actions">
                <button onclick={on_auto_balance}>{ "Auto-Balance Gear" }</button>
                <button onclick={on_save}>{ "Save Distribution" }</button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::TripDetails;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn board_planner() -> Planner {
        let mut planner = Planner::new(TripDetails {
            number_of_people: 2,
            distribute_gear: true,
            ..TripDetails::default()
        });
        planner.generate();
        planner
    }

    fn render(planner: Planner) -> String {
        let props = Props {
            planner,
            on_assign: Callback::noop(),
            on_auto_balance: Callback::noop(),
            on_save: Callback::noop(),
        };
        block_on(LocalServerRenderer::<DistributionBoard>::with_props(props).render())
    }

    #[test]
    fn renders_a_column_per_person_plus_shared() {
        let html = render(board_planner());
        assert!(html.contains("Shared Gear"));
        assert!(html.contains("Person 1"));
        assert!(html.contains("Person 2"));
        assert!(!html.contains("Person 3"));
    }

    #[test]
    fn column_headers_carry_item_counts() {
        let planner = board_planner();
        let carried = planner.carried_counts();
        let html = render(planner);
        assert!(html.contains(&format!("Person 1 ({} items)", carried[0])));
    }

    #[test]
    fn personal_gear_stays_in_the_shared_column() {
        let planner = board_planner();
        // The water bottle is personal; round-robin leaves it unassigned.
        let bottle = planner.items.iter().find(|i| i.id == "2").unwrap();
        assert!(bottle.assigned_to.is_none());
        let html = render(planner);
        assert!(html.contains("Water Bottle/Hydration System"));
    }

    #[test]
    fn board_items_are_draggable() {
        let html = render(board_planner());
        assert!(html.contains("draggable=\"true\""));
        assert!(html.contains("Auto-Balance Gear"));
    }
}
