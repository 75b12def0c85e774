//! Application shell: step flow, state, and persistence wiring.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::{DistributionBoard, DurationForm, PackingList, TripDetailsForm};
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use crate::planner::{
    ListFilter, Planner, PlannerEngine, TripDetails, ViewMode, WebPlannerStorage,
};

/// Pause between pressing Generate and showing the list, so the
/// transition reads as deliberate work. `None` generates immediately.
pub const GENERATION_DELAY_MS: Option<i32> = Some(1500);

/// Which screen of the planner flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Duration,
    Details,
    List,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let step = use_state(Step::default);
    let planner = use_state(Planner::default);
    let generating = use_state(|| false);
    let filter = use_state(ListFilter::default);

    // Restore any saved plan once on mount; a saved list jumps straight
    // to the list view.
    {
        let step = step.clone();
        let planner = planner.clone();
        use_effect_with((), move |_| {
            let engine = PlannerEngine::new(WebPlannerStorage);
            match engine.load_plan() {
                Ok(Some(saved)) => {
                    if !saved.items.is_empty() {
                        step.set(Step::List);
                    }
                    planner.set(saved);
                }
                Ok(None) => {}
                Err(err) => dom::console_error(&format!("failed to restore saved plan: {err}")),
            }
        });
    }

    let on_trip_change = {
        let planner = planner.clone();
        Callback::from(move |trip: TripDetails| {
            let mut next = (*planner).clone();
            next.trip = trip;
            planner.set(next);
        })
    };

    let go_to_details = {
        let step = step.clone();
        Callback::from(move |()| step.set(Step::Details))
    };
    let go_to_duration = {
        let step = step.clone();
        Callback::from(move |()| step.set(Step::Duration))
    };

    let on_generate = {
        let step = step.clone();
        let planner = planner.clone();
        let generating = generating.clone();
        let filter = filter.clone();
        Callback::from(move |()| {
            if *generating {
                return;
            }
            generating.set(true);
            let step = step.clone();
            let planner = planner.clone();
            let generating = generating.clone();
            let filter = filter.clone();
            spawn_local(async move {
                if let Some(delay) = GENERATION_DELAY_MS {
                    let _ = dom::sleep_ms(delay).await;
                }
                let mut next = (*planner).clone();
                next.generate();
                planner.set(next);
                filter.set(ListFilter::default());
                generating.set(false);
                step.set(Step::List);
            });
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ListFilter| filter.set(next))
    };
    let on_toggle = {
        let planner = planner.clone();
        Callback::from(move |id: String| {
            let mut next = (*planner).clone();
            next.toggle_checked(&id);
            planner.set(next);
        })
    };
    let on_remove = {
        let planner = planner.clone();
        Callback::from(move |id: String| {
            let mut next = (*planner).clone();
            next.remove_item(&id);
            planner.set(next);
        })
    };
    let on_add_custom = {
        let planner = planner.clone();
        Callback::from(move |(name, category, quantity): (String, String, u32)| {
            let mut next = (*planner).clone();
            next.add_custom_item(&name, &category, quantity);
            planner.set(next);
        })
    };
    let on_assign = {
        let planner = planner.clone();
        Callback::from(move |(id, person): (String, Option<u32>)| {
            let mut next = (*planner).clone();
            next.assign_item(&id, person);
            planner.set(next);
        })
    };
    let on_auto_balance = {
        let planner = planner.clone();
        Callback::from(move |()| {
            let mut next = (*planner).clone();
            next.auto_balance();
            planner.set(next);
        })
    };
    let on_save = {
        let planner = planner.clone();
        Callback::from(move |()| {
            let engine = PlannerEngine::new(WebPlannerStorage);
            if let Err(err) = engine.save_plan(&planner) {
                dom::console_error(&format!("failed to save plan: {err}"));
            }
        })
    };

    html! {
        <main class="adventure-planner">
            <h1>{ "Adventure Planner" }</h1>
            {
                match *step {
                    Step::Duration => html! {
                        <DurationForm
                            trip={planner.trip.clone()}
                            on_change={on_trip_change.clone()}
                            on_next={go_to_details.clone()}
                        />
                    },
                    Step::Details => html! {
                        <TripDetailsForm
                            trip={planner.trip.clone()}
                            on_change={on_trip_change.clone()}
                            on_back={go_to_duration.clone()}
                            on_generate={on_generate.clone()}
                            generating={*generating}
                        />
                    },
                    Step::List => html! {
                        <>
                            <PackingList
                                planner={(*planner).clone()}
                                filter={(*filter).clone()}
                                on_filter_change={on_filter_change.clone()}
                                on_toggle={on_toggle}
                                on_remove={on_remove}
                                on_add_custom={on_add_custom}
                                on_save={on_save.clone()}
                                on_edit_trip={go_to_details.clone()}
                            />
                            if filter.view_mode == ViewMode::Distribution {
                                <DistributionBoard
                                    planner={(*planner).clone()}
                                    on_assign={on_assign}
                                    on_auto_balance={on_auto_balance}
                                    on_save={on_save}
                                />
                            }
                        </>
                    },
                }
            }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_starts_at_the_duration_step() {
        assert_eq!(Step::default(), Step::Duration);
    }

    #[test]
    fn generation_delay_is_a_bounded_knob() {
        if let Some(delay) = GENERATION_DELAY_MS {
            assert!(delay >= 0);
        }
    }
}
