// Great-circle distances between a handful of cities, computed from both
// coordinate representations.

use orthodrome::{Coordinate, CoordinateRegistry, Location};

fn main() -> orthodrome::Result<()> {
    let registry = CoordinateRegistry::new();

    let cities = [
        ("Erlangen", 49.58, 11.01),
        ("Houston", 29.76, -95.36),
        ("Yakutsk", 62.03, 129.6),
        ("Sydney", -33.86, 151.2),
    ];

    let locations: Vec<Location> = cities
        .iter()
        .map(|(name, lat, lon)| -> orthodrome::Result<Location> {
            Ok(Location::new(*name, registry.spheric_on_earth(*lat, *lon)?))
        })
        .collect::<orthodrome::Result<_>>()?;

    println!("{:<10} {:<10} {:>12} {:>12}", "From", "To", "Spheric km", "Cartesian km");
    for (i, from) in locations.iter().enumerate() {
        let to = &locations[(i + 1) % locations.len()];
        let spheric_km = from.distance_to(to)?;

        let from_xyz = match from.coordinate() {
            Some(c) => registry.intern_cartesian(c.to_cartesian()),
            None => continue,
        };
        let to_xyz = match to.coordinate() {
            Some(c) => registry.intern_cartesian(c.to_cartesian()),
            None => continue,
        };
        let cartesian_km = from_xyz.distance_to(&*to_xyz)?;

        println!(
            "{:<10} {:<10} {:>12.1} {:>12.1}",
            from.name(),
            to.name(),
            spheric_km,
            cartesian_km
        );
    }

    let stats = registry.stats();
    println!(
        "\nRegistry holds {} spheric and {} cartesian instances",
        stats.spheric_instances, stats.cartesian_instances
    );

    Ok(())
}
