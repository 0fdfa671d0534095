use nes_catalog::{extract_games, extract_games_with_options, GameRecord, Options, RegionMarker};

const SAMPLE_PAGE: &str = include_str!("fixtures/nes_list_sample.html");

fn page(heading: &str, rows: &[[&str; 3]]) -> String {
    let mut html = format!(
        "<html><body><h2>{heading}</h2><table>\
         <tr><th>Title</th><th>Publisher</th><th>Release Date</th></tr>"
    );
    for [title, publisher, date] in rows {
        html.push_str(&format!("<tr><td>{title}</td><td>{publisher}</td><td>{date}</td></tr>"));
    }
    html.push_str("</table></body></html>");
    html
}

fn titles(records: &[GameRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn two_rows_under_north_america_keep_row_order() {
    let html = page(
        "North America",
        &[
            ["Super Mario Bros.", "Nintendo", "September 13, 1985"],
            ["The Legend of Zelda", "Nintendo", "February 21, 1986"],
        ],
    );

    let games = extract_games(&html);

    assert_eq!(
        games,
        vec![
            GameRecord {
                title: "Super Mario Bros.".to_string(),
                publisher: "Nintendo".to_string(),
                year: 85,
                release_date: "September 13, 1985".to_string(),
                region: "North America".to_string(),
            },
            GameRecord {
                title: "The Legend of Zelda".to_string(),
                publisher: "Nintendo".to_string(),
                year: 86,
                release_date: "February 21, 1986".to_string(),
                region: "North America".to_string(),
            },
        ]
    );
}

#[test]
fn unlicensed_rows_are_excluded() {
    let html = page(
        "North America",
        &[
            ["Bad Game (Unlicensed)", "Acme", "1990"],
            ["Good Game", "Acme", "1990"],
        ],
    );
    assert_eq!(titles(&extract_games(&html)), vec!["Good Game"]);
}

#[test]
fn short_rows_are_skipped() {
    let html = "<h2>North America</h2><table>\
        <tr><th>Title</th><th>Publisher</th><th>Release Date</th></tr>\
        <tr><td>Half Row</td><td>Nintendo</td></tr>\
        <tr><td>Full Row</td><td>Nintendo</td><td>1987</td></tr>\
        </table>";
    assert_eq!(titles(&extract_games(html)), vec!["Full Row"]);
}

#[test]
fn duplicate_key_keeps_first_publisher() {
    let html = page(
        "North America",
        &[
            ["Tetris", "Nintendo", "1989"],
            ["Tetris", "NINTENDO", "November 1989"],
        ],
    );
    let games = extract_games(&html);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].publisher, "Nintendo");
    assert_eq!(games[0].release_date, "1989");
}

#[test]
fn same_title_in_different_years_is_kept() {
    let html = page(
        "North America",
        &[["Tetris", "Tengen", "May 1989"], ["Tetris", "Nintendo", "1990"]],
    );
    let years: Vec<u8> = extract_games(&html).iter().map(|g| g.year).collect();
    assert_eq!(years, vec![89, 90]);
}

#[test]
fn japanese_table_contributes_nothing() {
    let html = page("Japan", &[["Donkey Kong", "Nintendo", "July 15, 1986"]]);
    assert!(extract_games(&html).is_empty());
}

#[test]
fn undated_rows_are_skipped() {
    let html = page(
        "North America",
        &[["Gyromite", "Nintendo", "Unknown"], ["Metroid", "Nintendo", "1987"]],
    );
    assert_eq!(titles(&extract_games(&html)), vec!["Metroid"]);
}

#[test]
fn year_window_is_inclusive_and_configurable() {
    let html = page(
        "North America",
        &[
            ["Early", "A", "1984"],
            ["Start", "A", "1985"],
            ["End", "A", "1995"],
            ["Late", "A", "1996"],
        ],
    );
    assert_eq!(titles(&extract_games(&html)), vec!["Start", "End"]);

    let narrow = Options::default().with_year_range(95, 96);
    let games = extract_games_with_options(&html, &narrow).expect("valid options");
    assert_eq!(titles(&games), vec!["End", "Late"]);
}

#[test]
fn cell_whitespace_is_normalized_before_keying() {
    let html = page(
        "North America",
        &[
            ["  Duck\n   Hunt ", "Nintendo", "October 18, 1985"],
            ["Duck Hunt", "Nintendo", "1985"],
        ],
    );
    let games = extract_games(&html);
    assert_eq!(titles(&games), vec!["Duck Hunt"]);
}

#[test]
fn sample_page_yields_expected_catalog() {
    let games = extract_games(SAMPLE_PAGE);

    assert_eq!(
        titles(&games),
        vec![
            "Super Mario Bros.",
            "Duck Hunt",
            "The Legend of Zelda",
            "Metroid",
            "Tetris",
            "Wario's Woods",
            "Mega Man 6",
            "Kirby's Adventure",
            "Zelda II: The Adventure of Link",
            "Mother",
        ]
    );

    let smb = &games[0];
    assert_eq!(smb.release_date, "October 18, 1985");
    assert_eq!(smb.year, 85);

    let tetris = games.iter().find(|g| g.title == "Tetris").expect("tetris present");
    assert_eq!(tetris.publisher, "Tengen");
}

#[test]
fn sample_page_with_extra_region() {
    let options = Options::default().with_regions(vec![
        RegionMarker::north_america(),
        RegionMarker::new("europe", "Europe"),
    ]);
    let games = extract_games_with_options(SAMPLE_PAGE, &options).expect("valid options");

    let europe: Vec<&GameRecord> = games.iter().filter(|g| g.region == "Europe").collect();
    assert_eq!(europe.len(), 1);
    assert_eq!(europe[0].title, "Super Mario Bros.");
    assert_eq!(europe[0].year, 87);

    // Same title and region "North America" in 1985 stays separate.
    assert!(games
        .iter()
        .any(|g| g.title == "Super Mario Bros." && g.region == "North America"));
}

// === Properties ===

#[test]
fn extraction_is_idempotent() {
    assert_eq!(extract_games(SAMPLE_PAGE), extract_games(SAMPLE_PAGE));
}

#[test]
fn keys_are_pairwise_distinct() {
    let games = extract_games(SAMPLE_PAGE);
    for (i, a) in games.iter().enumerate() {
        for b in &games[i + 1..] {
            assert_ne!(a.key(), b.key(), "duplicate key for {}", a.title);
        }
    }
}

#[test]
fn every_record_respects_the_filters() {
    let options = Options::default();
    for game in extract_games(SAMPLE_PAGE) {
        assert!((options.min_year..=options.max_year).contains(&game.year));
        assert!(!game.title.contains("(Unlicensed)"));
        assert!(!game.title.is_empty());
        assert!(game.release_date.contains(&format!("19{:02}", game.year)));
        assert_eq!(game.region, "North America");
    }
}

#[test]
fn region_gating_ignores_table_content() {
    let options = Options::default().with_regions(vec![RegionMarker::new("antarctica", "AQ")]);
    let games = extract_games_with_options(SAMPLE_PAGE, &options).expect("valid options");
    assert!(games.is_empty());
}

#[test]
fn invalid_year_range_is_an_error() {
    let options = Options::default().with_year_range(96, 85);
    assert!(extract_games_with_options(SAMPLE_PAGE, &options).is_err());
}
