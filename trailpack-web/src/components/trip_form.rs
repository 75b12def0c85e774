//! Trip parameter forms: the duration step and the conditions step.
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::planner::{CampingStyle, Precipitation, Terrain, TripDetails, Weather};

pub const WEATHER_OPTIONS: [(Weather, &str, &str); 5] = [
    (Weather::Sunny, "sunny", "Sunny"),
    (Weather::Hot, "hot", "Hot"),
    (Weather::Rainy, "rainy", "Rainy"),
    (Weather::Cold, "cold", "Cold"),
    (Weather::Snow, "snow", "Snow"),
];

pub const TERRAIN_OPTIONS: [(Terrain, &str, &str); 5] = [
    (Terrain::Forest, "forest", "Forest"),
    (Terrain::Mountain, "mountain", "Mountain"),
    (Terrain::Desert, "desert", "Desert"),
    (Terrain::Coastal, "coastal", "Coastal"),
    (Terrain::Plains, "plains", "Plains"),
];

pub const STYLE_OPTIONS: [(CampingStyle, &str, &str); 7] = [
    (CampingStyle::Tent, "tent", "Tent"),
    (CampingStyle::Hammock, "hammock", "Hammock"),
    (CampingStyle::Tarp, "tarp", "Tarp"),
    (CampingStyle::CamperVan, "camper_van", "Camper Van"),
    (CampingStyle::Rv, "rv", "RV"),
    (CampingStyle::Cabin, "cabin", "Cabin"),
    (CampingStyle::Primitive, "primitive", "Primitive"),
];

pub const PRECIPITATION_OPTIONS: [(Precipitation, &str, &str); 6] = [
    (Precipitation::None, "none", "None expected"),
    (Precipitation::LightRain, "light_rain", "Light rain"),
    (Precipitation::HeavyRain, "heavy_rain", "Heavy rain"),
    (Precipitation::LightSnow, "light_snow", "Light snow"),
    (Precipitation::HeavySnow, "heavy_snow", "Heavy snow"),
    (Precipitation::Mixed, "mixed", "Mixed"),
];

fn input_u32(e: &Event, fallback: u32) -> u32 {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().parse().unwrap_or(fallback).max(1)
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[derive(Properties, PartialEq, Clone)]
pub struct DurationProps {
    pub trip: TripDetails,
    pub on_change: Callback<TripDetails>,
    pub on_next: Callback<()>,
}

/// First step: how long and how many people.
#[function_component(DurationForm)]
pub fn duration_form(props: &DurationProps) -> Html {
    let on_duration = {
        let trip = props.trip.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let mut next = trip.clone();
            next.duration = input_u32(&e, next.duration);
            on_change.emit(next);
        })
    };
    let on_people = {
        let trip = props.trip.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let mut next = trip.clone();
            next.number_of_people = input_u32(&e, next.number_of_people);
            on_change.emit(next);
        })
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <section class="trip-duration">
            <h2>{ "Trip Duration" }</h2>
            <label for="trip-duration">{ "How many days?" }</label>
            <input
                id="trip-duration"
                type="number"
                min="1"
                value={props.trip.duration.to_string()}
                onchange={on_duration}
            />
            <label for="trip-people">{ "How many people?" }</label>
            <input
                id="trip-people"
                type="number"
                min="1"
                value={props.trip.number_of_people.to_string()}
                onchange={on_people}
            />
            <button onclick={on_next}>{ "Next" }</button>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DetailsProps {
    pub trip: TripDetails,
    pub on_change: Callback<TripDetails>,
    pub on_back: Callback<()>,
    pub on_generate: Callback<()>,
    pub generating: bool,
}

/// Second step: conditions, terrain, style, party, and pet.
#[function_component(TripDetailsForm)]
pub fn trip_details_form(props: &DetailsProps) -> Html {
    let change =
        |apply: fn(&mut TripDetails, Event)| -> Callback<Event> {
            let trip = props.trip.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |e: Event| {
                let mut next = trip.clone();
                apply(&mut next, e);
                on_change.emit(next);
            })
        };

    let on_weather = change(|t, e| t.weather = select_value(&e).parse().unwrap_or_default());
    let on_terrain = change(|t, e| t.terrain = select_value(&e).parse().unwrap_or_default());
    let on_style = change(|t, e| t.camping_style = select_value(&e).parse().unwrap_or_default());
    let on_precipitation =
        change(|t, e| t.precipitation_type = select_value(&e).parse().unwrap_or_default());
    let on_high = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.temperature_high = input.value().parse().unwrap_or(t.temperature_high);
    });
    let on_low = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.temperature_low = input.value().parse().unwrap_or(t.temperature_low);
    });
    let on_windy = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.is_windy = input.checked();
    });
    let on_distribute = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.distribute_gear = input.checked();
    });
    let on_has_pet = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.has_pet = input.checked();
    });
    let on_pet_name = change(|t, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        t.pet_name = input.value();
    });

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let on_generate = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| on_generate.emit(()))
    };

    let option_list = |selected: &str, options: &[(&'static str, &'static str)]| -> Html {
        options
            .iter()
            .map(|(tag, label)| {
                html! {
                    <option value={tag.to_string()} selected={*tag == selected}>
                        { *label }
                    </option>
                }
            })
            .collect::<Html>()
    };

    let weather_tag = WEATHER_OPTIONS
        .iter()
        .find(|(w, _, _)| *w == props.trip.weather)
        .map_or("sunny", |(_, t, _)| *t);
    let terrain_tag = TERRAIN_OPTIONS
        .iter()
        .find(|(t, _, _)| *t == props.trip.terrain)
        .map_or("forest", |(_, t, _)| *t);
    let style_tag = STYLE_OPTIONS
        .iter()
        .find(|(s, _, _)| *s == props.trip.camping_style)
        .map_or("tent", |(_, t, _)| *t);
    let precipitation_tag = PRECIPITATION_OPTIONS
        .iter()
        .find(|(p, _, _)| *p == props.trip.precipitation_type)
        .map_or("none", |(_, t, _)| *t);

    html! {
        <section class="trip-details">
            <h2>{ "Trip Conditions" }</h2>

            <label for="trip-weather">{ "Weather" }</label>
            <select id="trip-weather" onchange={on_weather}>
                { option_list(weather_tag, &WEATHER_OPTIONS.map(|(_, t, l)| (t, l))) }
            </select>

            <label for="trip-temp-high">{ "High (°F)" }</label>
            <input
                id="trip-temp-high"
                type="number"
                value={props.trip.temperature_high.to_string()}
                onchange={on_high}
            />
            <label for="trip-temp-low">{ "Low (°F)" }</label>
            <input
                id="trip-temp-low"
                type="number"
                value={props.trip.temperature_low.to_string()}
                onchange={on_low}
            />

            <label for="trip-precipitation">{ "Precipitation" }</label>
            <select id="trip-precipitation" onchange={on_precipitation}>
                { option_list(precipitation_tag, &PRECIPITATION_OPTIONS.map(|(_, t, l)| (t, l))) }
            </select>

            <label>
                <input type="checkbox" checked={props.trip.is_windy} onchange={on_windy} />
                { "Windy conditions expected" }
            </label>

            <label for="trip-terrain">{ "Terrain" }</label>
            <select id="trip-terrain" onchange={on_terrain}>
                { option_list(terrain_tag, &TERRAIN_OPTIONS.map(|(_, t, l)| (t, l))) }
            </select>

            <label for="trip-style">{ "Camping style" }</label>
            <select id="trip-style" onchange={on_style}>
                { option_list(style_tag, &STYLE_OPTIONS.map(|(_, t, l)| (t, l))) }
            </select>

            if props.trip.number_of_people > 1 {
                <label>
                    <input
                        type="checkbox"
                        checked={props.trip.distribute_gear}
                        onchange={on_distribute}
                    />
                    { "Distribute gear between people" }
                </label>
            }

            <label>
                <input type="checkbox" checked={props.trip.has_pet} onchange={on_has_pet} />
                { "Bringing a pet" }
            </label>
            if props.trip.has_pet {
                <label for="trip-pet-name">{ "Pet's name" }</label>
                <input
                    id="trip-pet-name"
                    type="text"
                    value={props.trip.pet_name.clone()}
                    onchange={on_pet_name}
                />
            }

            <div class="form-actions">
                <button onclick={on_back}>{ "Back" }</button>
                <button onclick={on_generate} disabled={props.generating}>
                    { if props.generating { "Generating..." } else { "Generate Packing List" } }
                </button>
            </div>
        </section>
    }
}
