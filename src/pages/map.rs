//! Captures Map Page
//!
//! World view of unlocked sticker locations. With a configured map-tile
//! token each point renders a static tile image; without one the page
//! degrades to the plain list.

use leptos::*;
use leptos_router::*;

use crate::api::models::StickerLocation;
use crate::api::{resolve_media_url, stickers};
use crate::components::{ListSkeleton, use_toasts};
use crate::config;
use crate::state::remote::{load_into, Remote};

/// Static tile for one capture, via the Mapbox Static Images API.
fn static_tile_url(token: &str, lat: f64, lng: f64) -> String {
    format!(
        "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static/pin-l+2563eb({lng},{lat})/{lng},{lat},12,0/400x200?access_token={token}"
    )
}

fn parse_coords(location: &StickerLocation) -> Option<(f64, f64)> {
    let lat = location.location_lat.as_deref()?.parse::<f64>().ok()?;
    let lng = location.location_lng.as_deref()?.parse::<f64>().ok()?;
    Some((lat, lng))
}

/// Captures map page
#[component]
pub fn MapPage() -> impl IntoView {
    let toasts = use_toasts();
    let locations = create_rw_signal(Remote::<Vec<StickerLocation>>::default());

    create_effect(move |_| {
        load_into(locations, stickers::locations());
    });

    create_effect(move |_| {
        if locations.get().error().is_some() {
            toasts.error("Couldn't load the capture locations.");
        }
    });

    let token = config::mapbox_token();

    view! {
        <div class="flex-1 p-10 max-w-6xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-2">"Capture map"</h1>
            <p class="text-gray-500 mb-8">"Where the community unlocked its stickers."</p>

            {move || {
                let token = token.clone();
                match locations.get() {
                    Remote::Idle | Remote::Loading => view! { <ListSkeleton count=4 /> }.into_view(),
                    Remote::Failed(message) => view! {
                        <p class="text-red-600">{message}</p>
                    }.into_view(),
                    Remote::Ready(items) => {
                        let located: Vec<StickerLocation> = items
                            .into_iter()
                            .filter(|l| parse_coords(l).is_some())
                            .collect();
                        if located.is_empty() {
                            view! {
                                <p class="text-gray-500 text-center py-12">
                                    "No geo-tagged captures yet."
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 gap-6">
                                    {located.into_iter().map(|location| view! {
                                        <LocationCard location=location token=token.clone() />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn LocationCard(location: StickerLocation, token: Option<String>) -> impl IntoView {
    let coords = parse_coords(&location);
    let tile = match (&token, coords) {
        (Some(token), Some((lat, lng))) => Some(static_tile_url(token, lat, lng)),
        _ => None,
    };
    let photo = resolve_media_url(location.photo_url.as_deref());
    let sticker_href = format!("/app/stickers/{}", location.sticker_id);

    view! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition">
            {tile.map(|src| view! {
                <img src=src alt="Map" class="w-full h-48 object-cover" />
            })}
            <div class="p-4 flex items-center space-x-4">
                {photo.map(|src| view! {
                    <img src=src alt="" class="w-14 h-14 rounded-lg object-cover" />
                })}
                <div class="flex-1">
                    <A href=sticker_href class="font-semibold text-gray-800 hover:text-blue-600">
                        {location.sticker_name.clone()}
                    </A>
                    {location.album_title.clone().map(|album| view! {
                        <p class="text-sm text-gray-500">{album}</p>
                    })}
                    <p class="text-xs text-gray-400 mt-1">
                        {location.username.clone().map(|u| format!("by {}", u)).unwrap_or_default()}
                        {location.unlocked_at.clone().map(|d| format!(" · {}", d)).unwrap_or_default()}
                    </p>
                </div>
                <span class="text-2xl">"📍"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(lat: Option<&str>, lng: Option<&str>) -> StickerLocation {
        StickerLocation {
            sticker_id: 1,
            sticker_name: "GT-R".into(),
            album_id: None,
            album_title: None,
            username: None,
            location_lat: lat.map(str::to_string),
            location_lng: lng.map(str::to_string),
            photo_url: None,
            unlocked_at: None,
        }
    }

    #[test]
    fn test_parse_coords() {
        assert_eq!(
            parse_coords(&location(Some("40.416775"), Some("-3.703790"))),
            Some((40.416775, -3.703790))
        );
        assert_eq!(parse_coords(&location(None, Some("-3.7"))), None);
        assert_eq!(parse_coords(&location(Some("not a number"), Some("-3.7"))), None);
    }

    #[test]
    fn test_static_tile_url_embeds_point_and_token() {
        let url = static_tile_url("tok123", 40.4, -3.7);
        assert!(url.contains("(-3.7,40.4)"));
        assert!(url.ends_with("access_token=tok123"));
    }
}
