use crate::domain::stats::{Affiliation, PlayerStats};
use crate::domain::tag::PlayerTag;

/// Renders a count with thousands separators, `31000` becomes `31,000`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}

/// Player name for display. The APIs can legally send an empty name.
#[must_use]
pub fn display_name(stats: &PlayerStats) -> &str {
    let name = stats.name();

    if name.is_empty() {
        "Unknown"
    } else {
        name
    }
}

pub(crate) fn affiliation_or_dash(affiliation: Option<&Affiliation>) -> &str {
    match affiliation {
        Some(group) if !group.name.is_empty() => &group.name,
        _ => "-",
    }
}

/// Caption under a photo post. Short on purpose, the card carries the
/// numbers.
#[must_use]
pub fn caption(stats: &PlayerStats, tag: &PlayerTag, description: &str, submitter: &str) -> String {
    let highlight = match stats {
        PlayerStats::BrawlStars(brawl) => format!("🎮 Brawlers: {}", brawl.brawlers.len()),
        PlayerStats::ClashRoyale(royale) => format!("🃏 Cards: {}", royale.cards.len()),
        PlayerStats::ClashOfClans(clash) => format!("🏰 Town Hall: {}", clash.town_hall_level),
    };

    format!(
        "📊 {name} ({tag})\n🏆 Trophies: {trophies}\n{highlight}\n\n📝 {description}\n\n👤 Submitted by: {submitter}",
        name = display_name(stats),
        trophies = group_thousands(u64::from(stats.trophies())),
    )
}

/// Full stats block for games posted as text instead of a card.
#[must_use]
pub fn stats_text(stats: &PlayerStats, tag: &PlayerTag) -> String {
    let mut lines = vec![
        format!("📊 {} ({tag})", display_name(stats)),
        format!(
            "🏆 Trophies: {} (best {})",
            group_thousands(u64::from(stats.trophies())),
            group_thousands(u64::from(stats.best_trophies())),
        ),
    ];

    match stats {
        PlayerStats::BrawlStars(brawl) => {
            lines.push(format!("🎖 Experience level: {}", brawl.exp_level));
            lines.push(format!(
                "⚔️ 3v3 victories: {}",
                group_thousands(u64::from(brawl.team_victories))
            ));
            lines.push(format!(
                "🏅 Solo victories: {}",
                group_thousands(u64::from(brawl.solo_victories))
            ));
            lines.push(format!(
                "🤝 Duo victories: {}",
                group_thousands(u64::from(brawl.duo_victories))
            ));
            lines.push(format!(
                "🏠 Club: {}",
                affiliation_or_dash(brawl.club.as_ref())
            ));
            lines.push(format!("🎮 Brawlers: {}", brawl.brawlers.len()));
        }
        PlayerStats::ClashRoyale(royale) => {
            lines.push(format!("🎖 Experience level: {}", royale.exp_level));
            lines.push(format!("⚔️ Wins: {}", group_thousands(u64::from(royale.wins))));
            lines.push(format!(
                "💔 Losses: {}",
                group_thousands(u64::from(royale.losses))
            ));
            lines.push(format!(
                "🎮 Battles: {}",
                group_thousands(u64::from(royale.battle_count))
            ));
            lines.push(format!(
                "🏟 Arena: {}",
                affiliation_or_dash(royale.arena.as_ref())
            ));
            lines.push(format!(
                "🏠 Clan: {}",
                affiliation_or_dash(royale.clan.as_ref())
            ));
            lines.push(format!("🃏 Cards: {}", royale.cards.len()));
        }
        PlayerStats::ClashOfClans(clash) => {
            lines.push(format!("🏰 Town Hall: {}", clash.town_hall_level));
            if clash.builder_hall_level > 0 {
                lines.push(format!("🔨 Builder Hall: {}", clash.builder_hall_level));
            }
            lines.push(format!("🎖 Experience level: {}", clash.exp_level));
            lines.push(format!(
                "⭐ War stars: {}",
                group_thousands(u64::from(clash.war_stars))
            ));
            lines.push(format!("⚔️ Attack wins: {}", clash.attack_wins));
            lines.push(format!("🛡 Defense wins: {}", clash.defense_wins));
            lines.push(format!(
                "🏠 Clan: {}",
                affiliation_or_dash(clash.clan.as_ref())
            ));
            for hero in clash.heroes.iter().take(5) {
                lines.push(format!("🦸 {}: {}/{}", hero.name, hero.level, hero.max_level));
            }
        }
    }

    lines.join("\n")
}

/// Full text post: stats block plus the description and attribution.
#[must_use]
pub fn text_post(
    stats: &PlayerStats,
    tag: &PlayerTag,
    description: &str,
    submitter: &str,
) -> String {
    format!(
        "{}\n\n📝 {description}\n\n👤 Submitted by: {submitter}",
        stats_text(stats, tag)
    )
}

/// File name attached to outgoing card images.
#[must_use]
pub fn photo_file_name(tag: &PlayerTag) -> String {
    format!("stats_{}.png", tag.bare())
}
