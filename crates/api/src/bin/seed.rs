//! Seed the database with starter venues, tips, and opportunities.
//!
//! Venues have no public create endpoint, so this binary is how a fresh
//! deployment gets its directory. Re-running it adds another copy of the
//! seed rows; run it once against an empty database.
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```

use herframe_db::models::opportunity::CreateOpportunity;
use herframe_db::models::tip::CreateTip;
use herframe_db::models::venue::CreateVenue;
use herframe_db::repositories::{OpportunityRepo, TipRepo, VenueRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn venue(name: &str, address: &str, city: &str, category: &str) -> CreateVenue {
    // Guard the hand-maintained list against typos in the category column.
    herframe_core::venue::validate_category(category).expect("seed venue category");
    CreateVenue {
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        category: Some(category.to_string()),
    }
}

fn tip(body: &str, category: &str) -> CreateTip {
    CreateTip {
        body: body.to_string(),
        category: Some(category.to_string()),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = herframe_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    herframe_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let venues = [
        venue("Prism Gallery", "120 Art District Blvd", "Portland", "gallery"),
        venue("Clay & Fire Studio", "45 Ceramic Way", "Austin", "pottery_studio"),
        venue("Wynwood Walls", "2520 NW 2nd Ave", "Miami", "graffiti_spot"),
        venue("The MakerHouse", "88 Innovation Dr", "Brooklyn", "makerspace"),
        venue("Sunset Sculpture Garden", "300 Ocean View Rd", "Los Angeles", "outdoor"),
        venue("Palette Studios", "77 Canvas St", "Chicago", "studio"),
        venue("East Side Murals", "15 Graffiti Alley", "Denver", "graffiti_spot"),
        venue("Kiln & Thread", "200 Craft Ave", "Nashville", "pottery_studio"),
        venue("Digital Canvas Co-op", "42 Tech Row", "San Francisco", "makerspace"),
        venue("The Loft Gallery", "500 High St", "New York", "gallery"),
    ];

    for v in &venues {
        VenueRepo::create(&pool, v).await.expect("Failed to seed venue");
    }
    tracing::info!(count = venues.len(), "Seeded venues");

    let tips = [
        tip(
            "Always get commission terms in writing before showing at a new gallery. \
             Some take up to 60%.",
            "pricing",
        ),
        tip(
            "Clay & Fire Studio in Austin has the best kiln access and fair studio rates. \
             Highly recommend!",
            "general",
        ),
        tip(
            "For pottery glazes, Amaco and Mayco have the best price-to-quality ratio. \
             Skip the boutique brands.",
            "supplies",
        ),
        tip(
            "If you price your art too low, you bring down the market for everyone. \
             Know your worth!",
            "pricing",
        ),
        tip(
            "Try wet-on-wet technique for watercolors -- it gives an ethereal look that \
             collectors love.",
            "technique",
        ),
        tip(
            "Blick Art Materials has a student discount even if you are not a current \
             student. Just ask.",
            "supplies",
        ),
    ];

    for t in &tips {
        TipRepo::create(&pool, t).await.expect("Failed to seed tip");
    }
    tracing::info!(count = tips.len(), "Seeded tips");

    let opportunities = [
        CreateOpportunity {
            title: "Fractured Light".to_string(),
            artist_name: "Maya Chen".to_string(),
            description: "A digital exploration of how light breaks through urban \
                          architecture. Created using generative algorithms and \
                          hand-painted overlays."
                .to_string(),
            story: None,
            medium: Some("digital".to_string()),
            image_url: None,
            price: Some("$350".to_string()),
            negotiable: Some(true),
        },
        CreateOpportunity {
            title: "Vessel of Memory".to_string(),
            artist_name: "Aisha Okafor".to_string(),
            description: "A hand-thrown ceramic piece inspired by the shapes of vessels \
                          found in my grandmother's kitchen. Raku-fired with copper matte \
                          glaze."
                .to_string(),
            story: None,
            medium: Some("pottery".to_string()),
            image_url: None,
            price: Some("$480".to_string()),
            negotiable: Some(false),
        },
        CreateOpportunity {
            title: "Woven Histories".to_string(),
            artist_name: "Priya Sharma".to_string(),
            description: "A textile piece combining traditional weaving techniques with \
                          recycled materials. Each thread tells a story of displacement \
                          and belonging."
                .to_string(),
            story: None,
            medium: Some("textile".to_string()),
            image_url: None,
            price: Some("$600".to_string()),
            negotiable: Some(true),
        },
    ];

    for o in &opportunities {
        OpportunityRepo::create(&pool, o)
            .await
            .expect("Failed to seed opportunity");
    }
    tracing::info!(count = opportunities.len(), "Seeded opportunities");

    tracing::info!("Seeding complete");
}
