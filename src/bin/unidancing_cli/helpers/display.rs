// ABOUTME: Output formatting helpers for unidancing-cli
// ABOUTME: Consistent display of exercises, media items, and playlists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use unidancing::formatters::{
    format_difficulty, format_locomotion, format_personal, FormatOptions, GlyphIcons,
};
use unidancing::models::{Exercise, Media, Playlist, Track};

/// Display one exercise with its attributes on a single line
pub fn display_exercise(exercise: &Exercise) {
    let options = FormatOptions::icon_and_text();
    let personal = exercise
        .personal
        .iter()
        .map(|p| format_personal(*p, options, &GlyphIcons))
        .collect::<Vec<_>>()
        .join(", ");
    let locomotion = exercise
        .locomotion
        .map(|l| format_locomotion(l, options, &GlyphIcons))
        .unwrap_or_default();
    let difficulty = exercise
        .difficulty
        .map(|d| format_difficulty(d, options, &GlyphIcons))
        .unwrap_or_default();

    let media = exercise.all_media().count();
    println!(
        "{:<32} {personal:<24} {locomotion:<12} {difficulty:<20} {media} media",
        exercise.title
    );
}

/// Display a media item with its kind and title if it has one
pub fn display_media(media: &Media) {
    let kind = media.kind().map_or("unknown", |k| k.as_str());
    let title = media
        .str_field("title")
        .or_else(|| media.str_field("name"))
        .unwrap_or("(untitled)");
    println!("{kind:<10} {title}");
}

/// Display a playlist and its tracks
pub fn display_playlist(playlist: &Playlist, tracks: Option<&[Track]>) {
    println!("\n{}", playlist.name);
    println!("{}", "=".repeat(60));
    if let Some(description) = playlist.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{description}");
    }

    let Some(tracks) = tracks else {
        println!("(no track listing)");
        return;
    };
    for (index, track) in tracks.iter().enumerate() {
        let secs = track.duration_ms / 1000;
        println!(
            "{:>3}. {} - {} ({}:{:02})",
            index + 1,
            track.artist_names(),
            track.name,
            secs / 60,
            secs % 60
        );
    }
    let total_secs = playlist.duration_ms() / 1000;
    println!("{}", "-".repeat(60));
    println!(
        "{} tracks, {}:{:02} total",
        tracks.len(),
        total_secs / 60,
        total_secs % 60
    );
}
