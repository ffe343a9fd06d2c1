mod font;

use crate::domain::format::{affiliation_or_dash, display_name, group_thousands};
use crate::domain::game::Game;
use crate::domain::stats::{BrawlStats, ClashStats, PlayerStats, RoyaleStats};
use crate::domain::tag::PlayerTag;
use font::{draw_text, text_width};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

pub const CARD_WIDTH: u32 = 800;
pub const CARD_HEIGHT: u32 = 400;

const BACKGROUND: Rgb<u8> = Rgb([30, 30, 46]);
const TEXT: Rgb<u8> = Rgb([235, 235, 245]);
const MUTED: Rgb<u8> = Rgb([148, 148, 170]);
const TRACK: Rgb<u8> = Rgb([52, 52, 74]);

const MARGIN: i64 = 32;
const LIST_ROWS: usize = 5;

fn accent(game: Game) -> Rgb<u8> {
    match game {
        Game::BrawlStars => Rgb([250, 200, 60]),
        Game::ClashRoyale => Rgb([96, 150, 250]),
        Game::ClashOfClans => Rgb([120, 200, 96]),
    }
}

/// Fraction of `best` reached, clamped so over-best values fill the meter
/// instead of overflowing it.
fn ratio(current: u32, best: u32) -> f32 {
    if best == 0 {
        0.0
    } else {
        (current as f32 / best as f32).clamp(0.0, 1.0)
    }
}

/// References to the `count` highest scoring items, descending. Equal scores
/// keep their input order.
fn top_by<T, F: Fn(&T) -> u32>(items: &[T], count: usize, score: F) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| score(b).cmp(&score(a)));
    sorted.truncate(count);

    sorted
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, colour: Rgb<u8>) {
    for py in y..(y + height).min(canvas.height()) {
        for px in x..(x + width).min(canvas.width()) {
            canvas.put_pixel(px, py, colour);
        }
    }
}

fn draw_meter(canvas: &mut RgbImage, x: u32, y: u32, width: u32, fraction: f32, colour: Rgb<u8>) {
    const HEIGHT: u32 = 12;

    fill_rect(canvas, x, y, width, HEIGHT, TRACK);
    let filled = ((width as f32 * fraction).round() as u32).min(width);
    fill_rect(canvas, x, y, filled, HEIGHT, colour);
}

fn draw_cell(canvas: &mut RgbImage, x: i64, y: i64, label: &str, value: &str) {
    draw_text(canvas, x, y, label, 2, MUTED);
    draw_text(canvas, x, y + 20, value, 3, TEXT);
}

fn draw_header(canvas: &mut RgbImage, colour: Rgb<u8>, name: &str, sub: &str) {
    fill_rect(canvas, 0, 0, CARD_WIDTH, 6, colour);
    draw_text(canvas, MARGIN, 26, &clip(name, 24), 5, TEXT);
    draw_text(canvas, MARGIN, 72, sub, 2, MUTED);
}

fn draw_trophy_block(canvas: &mut RgbImage, current: u32, best: u32, colour: Rgb<u8>) {
    draw_text(canvas, MARGIN, 104, "TROPHIES", 2, MUTED);
    let value = format!(
        "{} / {}",
        group_thousands(u64::from(current)),
        group_thousands(u64::from(best))
    );
    draw_text(canvas, MARGIN, 124, &value, 3, TEXT);
    draw_meter(canvas, MARGIN as u32, 152, 736, ratio(current, best), colour);
}

fn draw_cells(canvas: &mut RgbImage, cells: [(&str, String); 3]) {
    for (index, (label, value)) in cells.iter().enumerate() {
        draw_cell(canvas, MARGIN + index as i64 * 256, 186, label, value);
    }
}

fn draw_list(
    canvas: &mut RgbImage,
    heading: &str,
    rows: Vec<(String, f32, String)>,
    colour: Rgb<u8>,
) {
    draw_text(canvas, MARGIN, 246, heading, 2, colour);

    for (index, (name, fraction, value)) in rows.iter().take(LIST_ROWS).enumerate() {
        let y = 268 + index as i64 * 24;
        draw_text(canvas, MARGIN, y, &clip(name, 18), 2, TEXT);
        draw_meter(canvas, 288, y as u32 + 3, 312, *fraction, colour);
        let value_x = (CARD_WIDTH as i64 - MARGIN) - i64::from(text_width(value, 2));
        draw_text(canvas, value_x, y, value, 2, MUTED);
    }
}

fn brawl_card(brawl: &BrawlStats, name: &str, tag: &PlayerTag) -> RgbImage {
    let colour = accent(Game::BrawlStars);
    let mut canvas = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);

    let sub = format!("{tag}  CLUB: {}", affiliation_or_dash(brawl.club.as_ref()));
    draw_header(&mut canvas, colour, name, &sub);
    draw_trophy_block(&mut canvas, brawl.trophies, brawl.highest_trophies, colour);
    draw_cells(
        &mut canvas,
        [
            ("3V3 WINS", group_thousands(u64::from(brawl.team_victories))),
            ("SOLO WINS", group_thousands(u64::from(brawl.solo_victories))),
            ("DUO WINS", group_thousands(u64::from(brawl.duo_victories))),
        ],
    );
    let rows = top_by(&brawl.brawlers, LIST_ROWS, |brawler| brawler.trophies)
        .into_iter()
        .map(|brawler| {
            (
                brawler.name.clone(),
                ratio(brawler.trophies, brawler.highest_trophies),
                group_thousands(u64::from(brawler.trophies)),
            )
        })
        .collect();
    draw_list(&mut canvas, "TOP BRAWLERS", rows, colour);

    canvas
}

fn royale_card(royale: &RoyaleStats, name: &str, tag: &PlayerTag) -> RgbImage {
    let colour = accent(Game::ClashRoyale);
    let mut canvas = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);

    let sub = format!(
        "{tag}  CLAN: {}  ARENA: {}",
        affiliation_or_dash(royale.clan.as_ref()),
        affiliation_or_dash(royale.arena.as_ref())
    );
    draw_header(&mut canvas, colour, name, &sub);
    draw_trophy_block(&mut canvas, royale.trophies, royale.best_trophies, colour);
    draw_cells(
        &mut canvas,
        [
            ("WINS", group_thousands(u64::from(royale.wins))),
            ("LOSSES", group_thousands(u64::from(royale.losses))),
            ("BATTLES", group_thousands(u64::from(royale.battle_count))),
        ],
    );
    let heading = format!("TOP CARDS ({})", royale.cards.len());
    let rows = top_by(&royale.cards, LIST_ROWS, |card| card.level)
        .into_iter()
        .map(|card| {
            (
                card.name.clone(),
                ratio(card.level, card.max_level),
                format!("{}/{}", card.level, card.max_level),
            )
        })
        .collect();
    draw_list(&mut canvas, &heading, rows, colour);

    canvas
}

fn clash_card(clash: &ClashStats, name: &str, tag: &PlayerTag) -> RgbImage {
    let colour = accent(Game::ClashOfClans);
    let mut canvas = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);

    let sub = format!("{tag}  CLAN: {}", affiliation_or_dash(clash.clan.as_ref()));
    draw_header(&mut canvas, colour, name, &sub);
    draw_trophy_block(&mut canvas, clash.trophies, clash.best_trophies, colour);
    draw_cells(
        &mut canvas,
        [
            ("TOWN HALL", clash.town_hall_level.to_string()),
            ("WAR STARS", group_thousands(u64::from(clash.war_stars))),
            ("EXP LEVEL", clash.exp_level.to_string()),
        ],
    );
    let rows = top_by(&clash.heroes, LIST_ROWS, |hero| hero.level)
        .into_iter()
        .map(|hero| {
            (
                hero.name.clone(),
                ratio(hero.level, hero.max_level),
                format!("{}/{}", hero.level, hero.max_level),
            )
        })
        .collect();
    draw_list(&mut canvas, "HEROES", rows, colour);

    canvas
}

fn encode_png(canvas: &RgbImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());

    if let Err(why) = canvas.write_to(&mut buffer, ImageFormat::Png) {
        log::error!("Failed to encode card image :( {why:?}");
    }

    buffer.into_inner()
}

/// Draws the fallback card for a profile. Same stats in, same bytes out;
/// nothing here touches the clock or the network.
#[must_use]
pub fn render_card(stats: &PlayerStats, tag: &PlayerTag) -> Vec<u8> {
    let name = display_name(stats);

    let canvas = match stats {
        PlayerStats::BrawlStars(brawl) => brawl_card(brawl, name, tag),
        PlayerStats::ClashRoyale(royale) => royale_card(royale, name, tag),
        PlayerStats::ClashOfClans(clash) => clash_card(clash, name, tag),
    };

    encode_png(&canvas)
}
