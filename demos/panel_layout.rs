use mirrormap::{GeoPoint, Viewport};

/// Lays out a complete dashboard map panel without any UI: base-map
/// tiles, then a handful of aircraft markers, then a JSON snapshot of
/// the whole layout. Run with `RUST_LOG=debug` to see tile coverage
/// logging.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🪞 Mirrormap Panel Layout");
    println!("=========================");

    // Home location as it would come out of a dashboard config file.
    let home: GeoPoint = "39.8283,-98.5795".parse()?;
    let panel = Viewport::new(home, 9, 800.0, 600.0);

    println!("✅ Panel configured:");
    println!("   Center: {:.4}, {:.4}", panel.center.lat, panel.center.lon);
    println!("   Zoom: {} ({:.1} m/px)", panel.zoom, panel.meters_per_pixel());
    println!("   Size: {}x{}", panel.width, panel.height);
    println!("   Center tile: {}", panel.center_tile().tile());

    println!("\n🗺️ Base-map tiles:");
    let tiles = panel.visible_tiles();
    for tile in &tiles {
        println!(
            "   {} at ({:.1}, {:.1})",
            tile.id, tile.origin.x, tile.origin.y
        );
    }
    println!("   {} tiles cover the panel", tiles.len());

    println!("\n✈️ Aircraft markers:");
    let aircraft = [
        ("N3794B", GeoPoint::new(39.9, -98.2)),
        ("SWA1943", GeoPoint::new(39.5, -99.1)),
        ("UAL288", GeoPoint::new(40.2, -98.6)),
        ("GLITCH", GeoPoint::new(f64::NAN, f64::NAN)),
        ("DAL714", GeoPoint::new(39.7392, -104.9903)),
    ];

    for (callsign, position) in aircraft {
        let px = panel.locate(position);
        if panel.contains(px) {
            println!(
                "   📍 {} at ({:.1}, {:.1}) - {:.1} km out, bearing {:.0}°",
                callsign,
                px.x,
                px.y,
                home.distance_to(&position) / 1000.0,
                home.bearing_to(&position)
            );
        } else {
            println!("   .. {} is off-panel, culled", callsign);
        }
    }

    println!("\n📦 Layout snapshot:");
    let snapshot = serde_json::json!({
        "panel": panel,
        "tiles": tiles,
        "bounds": panel.geo_bounds(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
