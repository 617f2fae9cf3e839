use std::fmt::{self, Write};
use urania::western::format_degree;
use urania::NatalChart;

/// Plain-text chart listing: birth data, planets, houses, aspects.
pub fn render_text(chart: &NatalChart) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let birth = &chart.birth_data;

    writeln!(
        out,
        "Natal chart for {} {} at {:.4}, {:.4}",
        birth.input.date, birth.input.time, birth.input.latitude, birth.input.longitude
    )?;
    writeln!(
        out,
        "Julian Day {:.5} ({}){}",
        birth.moment.julian_day,
        birth.moment.utc_instant.format("%Y-%m-%d %H:%M UTC"),
        if birth.moment.fallback { " [unparseable input, J2000.0 used]" } else { "" }
    )?;
    writeln!(out, "Ephemeris: {}", chart.ephemeris)?;

    writeln!(out, "\nPlanets")?;
    for planet in &chart.planets {
        writeln!(out, "  {:<20} {:+.4}°/day", planet.to_string(), planet.daily_speed)?;
    }

    let houses = &chart.houses;
    writeln!(
        out,
        "\nHouses ({}{})",
        houses.system,
        if houses.fallback { ", fallback" } else { "" }
    )?;
    writeln!(out, "  Asc {}", format_degree(houses.ascendant))?;
    writeln!(out, "  MC  {}", format_degree(houses.midheaven))?;
    for cusp in houses.iter() {
        writeln!(out, "  {}", cusp)?;
    }

    writeln!(out, "\nAspects")?;
    if chart.aspects.is_empty() {
        writeln!(out, "  none")?;
    }
    for aspect in &chart.aspects {
        writeln!(
            out,
            "  {}{}",
            aspect,
            if aspect.applying { " applying" } else { " separating" }
        )?;
    }
    Ok(out)
}
