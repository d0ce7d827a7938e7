//! Snapshot of the published state shape.
//!
//! Consumers read `AppState` as JSON (camelCase keys, opaque room fields).
//! The snapshot pins that shape after a full startup sync.

use serde_json::json;
use staybook_client::{Identity, ROOMS_PATH, USER_PATH};
use staybook_harness::{Scenario, settle};

#[tokio::test(start_paused = true)]
async fn startup_state_shape() {
    let scenario = Scenario::new();
    scenario.transport.respond(
        ROOMS_PATH,
        json!({
            "success": true,
            "rooms": [
                { "_id": "r1", "hotel": { "name": "Grand" }, "pricePerNight": 120 },
                { "id": "r2" }
            ]
        }),
    );
    scenario.transport.respond(
        USER_PATH,
        json!({ "success": true, "role": "hotelOwner", "recentSearchedCities": ["Paris", 7, "Oslo"] }),
    );
    let mut runtime = scenario.runtime();

    runtime.start();
    let _ = runtime.identity_changed(Some(Identity::new("user_1")));
    settle().await;

    insta::assert_json_snapshot!(scenario.state(), @r#"
    {
      "isOwner": true,
      "showHotelRegistration": false,
      "searchedCities": [
        "Paris",
        "Oslo"
      ],
      "rooms": [
        {
          "id": "r1",
          "hotel": {
            "name": "Grand"
          },
          "pricePerNight": 120
        }
      ],
      "loading": false
    }
    "#);
}
