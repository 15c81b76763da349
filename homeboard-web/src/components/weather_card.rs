use shared::models::{GeoError, WeatherReport};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::WeatherClient;
use crate::geo::{self, Coords};

/// Current-weather lookup by city search or browser geolocation.
///
/// Every lookup takes a ticket from a per-card generation counter; a
/// response whose ticket is no longer current is dropped, so firing a new
/// search while an old one is in flight can never show stale data.
#[function_component(WeatherCard)]
pub fn weather_card() -> Html {
    let city = use_state(String::new);
    let report = use_state(|| Option::<WeatherReport>::None);
    let error = use_state(|| Option::<&'static str>::None);
    let loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u32);

    let on_city_input = {
        let city = city.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                city.set(input.value());
            }
        })
    };

    let on_search = {
        let city = city.clone();
        let report = report.clone();
        let error = error.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            *generation.borrow_mut() += 1;
            let ticket = *generation.borrow();
            loading.set(true);
            error.set(None);

            let query = (*city).clone();
            let report = report.clone();
            let error = error.clone();
            let loading = loading.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = WeatherClient::shared().by_city(&query).await;
                if *generation.borrow() != ticket {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(fresh) => report.set(Some(fresh)),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_locate = {
        let city = city.clone();
        let report = report.clone();
        let error = error.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        Callback::from(move |_: MouseEvent| {
            *generation.borrow_mut() += 1;
            let ticket = *generation.borrow();
            loading.set(true);
            error.set(None);

            let on_position = {
                let city = city.clone();
                let report = report.clone();
                let error = error.clone();
                let loading = loading.clone();
                let generation = generation.clone();
                Callback::from(move |coords: Coords| {
                    let city = city.clone();
                    let report = report.clone();
                    let error = error.clone();
                    let loading = loading.clone();
                    let generation = generation.clone();
                    spawn_local(async move {
                        let result = WeatherClient::shared()
                            .by_coords(coords.latitude, coords.longitude)
                            .await;
                        if *generation.borrow() != ticket {
                            return;
                        }
                        loading.set(false);
                        match result {
                            Ok(fresh) => {
                                // Show which city the fix resolved to.
                                city.set(fresh.name.clone());
                                report.set(Some(fresh));
                            }
                            Err(err) => error.set(Some(err.user_message())),
                        }
                    });
                })
            };

            let on_geo_error = {
                let error = error.clone();
                let loading = loading.clone();
                let generation = generation.clone();
                Callback::from(move |geo_error: GeoError| {
                    if *generation.borrow() != ticket {
                        return;
                    }
                    loading.set(false);
                    error.set(Some(geo_error.user_message()));
                })
            };

            geo::request_position(on_position, on_geo_error);
        })
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineCloud} class="w-6 h-6" />
                    {"Weather"}
                </h2>

                <form class="flex gap-2" onsubmit={on_search}>
                    <input
                        type="text"
                        class="input input-bordered flex-grow"
                        placeholder="Search city"
                        value={(*city).clone()}
                        oninput={on_city_input}
                        disabled={*loading}
                    />
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4" />
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={on_locate}
                        disabled={*loading}
                        title="Use my location"
                    >
                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                    </button>
                </form>

                if *loading {
                    <div class="flex items-center gap-2 mt-2">
                        <span class="loading loading-spinner loading-sm"></span>
                        <span class="text-sm">{"Fetching weather..."}</span>
                    </div>
                } else if let Some(message) = *error {
                    <div class="alert alert-warning text-sm mt-2">{ message }</div>
                } else if let Some(current) = &*report {
                    { render_report(current) }
                }
            </div>
        </div>
    }
}

fn render_report(report: &WeatherReport) -> Html {
    let condition = report.primary_condition();
    let icon = condition.map(|c| {
        let url = format!("https://openweathermap.org/img/wn/{}@2x.png", c.icon);
        html! { <img src={url} alt={c.description.clone()} class="w-16 h-16" /> }
    });
    let description = condition.map(|c| c.description.clone()).unwrap_or_default();

    html! {
        <div class="mt-2">
            <div class="flex items-center gap-3">
                { icon.unwrap_or_default() }
                <div>
                    <p class="text-lg font-semibold">
                        { format!("{}, {}", report.name, report.sys.country) }
                    </p>
                    <p class="text-3xl font-bold">{ format!("{:.0}°C", report.main.temp) }</p>
                    <p class="text-sm capitalize text-base-content/70">{ description }</p>
                </div>
            </div>
            <div class="grid grid-cols-3 gap-2 text-sm mt-3">
                <div class="bg-base-100 rounded-lg p-2">
                    { format!("Feels like {:.0}°C", report.main.feels_like) }
                </div>
                <div class="bg-base-100 rounded-lg p-2">
                    { format!("Humidity {:.0}%", report.main.humidity) }
                </div>
                <div class="bg-base-100 rounded-lg p-2">
                    { format!("Wind {:.0} km/h", report.wind.speed * 3.6) }
                </div>
            </div>
        </div>
    }
}
