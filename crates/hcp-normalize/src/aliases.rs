/// Curated raw-name variants seen across the three source datasets, mapped
/// to the canonical ISO3 code. Static configuration: never learned or
/// inferred at run time.
///
/// Variants are matched after key normalization, so case and whitespace do
/// not matter here.
pub const ALIASES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("USA", "USA"),
    ("US", "USA"),
    ("United Kingdom", "GBR"),
    ("UK", "GBR"),
    ("Great Britain", "GBR"),
    ("Russia", "RUS"),
    ("South Korea", "KOR"),
    ("North Korea", "PRK"),
    ("Iran", "IRN"),
    ("Venezuela", "VEN"),
    ("Bolivia", "BOL"),
    ("Tanzania", "TZA"),
    ("Ivory Coast", "CIV"),
    ("Cote d'Ivoire", "CIV"),
    ("Cape Verde", "CPV"),
    ("Swaziland", "SWZ"),
    ("Macedonia", "MKD"),
    ("Czech Republic", "CZE"),
    ("Burma", "MMR"),
    ("East Timor", "TLS"),
    ("Moldova", "MDA"),
    ("Syria", "SYR"),
    ("Laos", "LAO"),
    ("Vietnam", "VNM"),
    ("Brunei", "BRN"),
    ("Micronesia (Fed. States of)", "FSM"),
    ("Palestine", "PSE"),
    ("Turkey", "TUR"),
    ("Turkiye", "TUR"),
    ("DR Congo", "COD"),
    ("Democratic Republic of Congo", "COD"),
];
