//! Static theme table
//!
//! One entry per selectable theme. Avatar unlock thresholds reference the
//! same stat counters the backend tracks (streak, tasks, points, kindness).

use egui::Color32;

use super::avatar::{Avatar, UnlockRequirement};
use super::{IconSet, Palette, SoundSet, Theme};

const fn avatar(
    name: &'static str,
    emoji: &'static str,
    color: Color32,
    unlock: UnlockRequirement,
) -> Avatar {
    Avatar {
        name,
        emoji,
        color,
        image: None,
        unlock,
        description: None,
    }
}

/// Registry order is presentation order; the first entry is the fallback.
pub(super) static THEMES: &[(&str, Theme)] = &[
    (
        "default",
        Theme {
            display_name: "Classic",
            palette: Palette {
                primary: Color32::from_rgb(79, 70, 229),
                secondary: Color32::from_rgb(124, 58, 237),
                accent: Color32::from_rgb(245, 158, 11),
                background: [Color32::from_rgb(102, 126, 234), Color32::from_rgb(118, 75, 162)],
            },
            icons: IconSet {
                points: "⭐",
                task: "✓",
                reward: "🎁",
                complete: "✅",
                pending: "⏳",
                streak: "🔥",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/default-ding.mp3",
                points_earn: "/static/sounds/default-coin.mp3",
            },
            avatars: &[
                avatar("Star", "⭐", Color32::from_rgb(255, 215, 0), UnlockRequirement::Default),
                avatar("Rocket", "🚀", Color32::from_rgb(79, 70, 229), UnlockRequirement::Default),
                Avatar {
                    name: "Rainbow",
                    emoji: "🌈",
                    color: Color32::from_rgb(124, 58, 237),
                    image: None,
                    unlock: UnlockRequirement::Streak(7),
                    description: Some("Keep a streak going for a whole week"),
                },
                Avatar {
                    name: "Lightning",
                    emoji: "⚡",
                    color: Color32::from_rgb(245, 158, 11),
                    image: None,
                    unlock: UnlockRequirement::Points(500),
                    description: Some("Earn 500 lifetime points"),
                },
            ],
        },
    ),
    (
        "minecraft",
        Theme {
            display_name: "Minecraft",
            palette: Palette {
                primary: Color32::from_rgb(139, 69, 19),
                secondary: Color32::from_rgb(34, 139, 34),
                accent: Color32::from_rgb(255, 215, 0),
                background: [Color32::from_rgb(124, 179, 66), Color32::from_rgb(85, 139, 47)],
            },
            icons: IconSet {
                points: "💎",
                task: "⛏️",
                reward: "🪓",
                complete: "✅",
                pending: "⏳",
                streak: "🔥",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/minecraft-ding.mp3",
                points_earn: "/static/sounds/minecraft-collect.mp3",
            },
            avatars: &[
                Avatar {
                    name: "Steve",
                    emoji: "🧑‍🦰",
                    color: Color32::from_rgb(0, 191, 255),
                    image: Some("/static/avatars/minecraft_steve.png"),
                    unlock: UnlockRequirement::Default,
                    description: None,
                },
                Avatar {
                    name: "Alex",
                    emoji: "👩‍🦰",
                    color: Color32::from_rgb(255, 99, 71),
                    image: Some("/static/avatars/minecraft_alex.png"),
                    unlock: UnlockRequirement::Default,
                    description: None,
                },
                Avatar {
                    name: "Creeper",
                    emoji: "💚",
                    color: Color32::from_rgb(0, 255, 0),
                    image: Some("/static/avatars/minecraft_creeper.png"),
                    unlock: UnlockRequirement::Streak(3),
                    description: Some("Three days in a row... ssssss"),
                },
                Avatar {
                    name: "Enderman",
                    emoji: "🖤",
                    color: Color32::from_rgb(128, 0, 128),
                    image: Some("/static/avatars/minecraft_enderman.png"),
                    unlock: UnlockRequirement::Streak(7),
                    description: Some("A full week without breaking the streak"),
                },
                Avatar {
                    name: "Zombie",
                    emoji: "🧟",
                    color: Color32::from_rgb(46, 139, 87),
                    image: Some("/static/avatars/minecraft_zombie.png"),
                    unlock: UnlockRequirement::Tasks(25),
                    description: Some("Complete 25 tasks"),
                },
                Avatar {
                    name: "Skeleton",
                    emoji: "💀",
                    color: Color32::from_rgb(245, 245, 245),
                    image: Some("/static/avatars/minecraft_skeleton.png"),
                    unlock: UnlockRequirement::Tasks(50),
                    description: Some("Complete 50 tasks"),
                },
                Avatar {
                    name: "Pig",
                    emoji: "🐷",
                    color: Color32::from_rgb(255, 182, 193),
                    image: Some("/static/avatars/minecraft_pig.png"),
                    unlock: UnlockRequirement::Kindness(5),
                    description: Some("Five acts of kindness"),
                },
                Avatar {
                    name: "Diamond",
                    emoji: "💎",
                    color: Color32::from_rgb(0, 206, 209),
                    image: Some("/static/avatars/minecraft_diamond.png"),
                    unlock: UnlockRequirement::Points(1000),
                    description: Some("Earn 1000 lifetime points"),
                },
            ],
        },
    ),
    (
        "roblox",
        Theme {
            display_name: "Roblox",
            palette: Palette {
                primary: Color32::from_rgb(227, 25, 55),
                secondary: Color32::from_rgb(0, 162, 255),
                accent: Color32::from_rgb(255, 201, 14),
                background: [Color32::from_rgb(227, 25, 55), Color32::from_rgb(0, 162, 255)],
            },
            icons: IconSet {
                points: "🪙",
                task: "🎮",
                reward: "🎁",
                complete: "✅",
                pending: "⏰",
                streak: "⚡",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/roblox-oof.mp3",
                points_earn: "/static/sounds/roblox-coin.mp3",
            },
            avatars: &[
                avatar("Bacon Hair", "🟥", Color32::from_rgb(227, 25, 55), UnlockRequirement::Default),
                Avatar {
                    name: "Guest 666",
                    emoji: "👻",
                    color: Color32::from_rgb(102, 102, 102),
                    image: None,
                    unlock: UnlockRequirement::Streak(3),
                    description: Some("Three-day streak"),
                },
                avatar("Noob", "🟨", Color32::from_rgb(255, 201, 14), UnlockRequirement::Default),
                Avatar {
                    name: "Cool Kid",
                    emoji: "😎",
                    color: Color32::from_rgb(0, 162, 255),
                    image: None,
                    unlock: UnlockRequirement::Tasks(10),
                    description: Some("Complete 10 tasks"),
                },
                Avatar {
                    name: "Builder",
                    emoji: "👷",
                    color: Color32::from_rgb(255, 102, 0),
                    image: None,
                    unlock: UnlockRequirement::Tasks(25),
                    description: Some("Complete 25 tasks"),
                },
                Avatar {
                    name: "Ninja",
                    emoji: "🥷",
                    color: Color32::from_rgb(0, 0, 0),
                    image: None,
                    unlock: UnlockRequirement::Streak(14),
                    description: Some("Two-week streak"),
                },
                Avatar {
                    name: "Superhero",
                    emoji: "🦸",
                    color: Color32::from_rgb(220, 20, 60),
                    image: None,
                    unlock: UnlockRequirement::Kindness(5),
                    description: Some("Five acts of kindness"),
                },
                Avatar {
                    name: "Pro Gamer",
                    emoji: "🎮",
                    color: Color32::from_rgb(155, 89, 182),
                    image: None,
                    unlock: UnlockRequirement::Tasks(100),
                    description: Some("Complete 100 tasks"),
                },
                Avatar {
                    name: "Adventurer",
                    emoji: "🗺️",
                    color: Color32::from_rgb(34, 139, 34),
                    image: None,
                    unlock: UnlockRequirement::Points(500),
                    description: Some("Earn 500 lifetime points"),
                },
                Avatar {
                    name: "Robux King",
                    emoji: "👑",
                    color: Color32::from_rgb(255, 215, 0),
                    image: None,
                    unlock: UnlockRequirement::Points(2500),
                    description: Some("Earn 2500 lifetime points"),
                },
            ],
        },
    ),
    (
        "barbie",
        Theme {
            display_name: "Barbie",
            palette: Palette {
                primary: Color32::from_rgb(255, 105, 180),
                secondary: Color32::from_rgb(221, 160, 221),
                accent: Color32::from_rgb(255, 215, 0),
                background: [Color32::from_rgb(255, 105, 180), Color32::from_rgb(221, 160, 221)],
            },
            icons: IconSet {
                points: "💖",
                task: "✨",
                reward: "👗",
                complete: "💕",
                pending: "🎀",
                streak: "👑",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/barbie-sparkle.mp3",
                points_earn: "/static/sounds/barbie-yay.mp3",
            },
            avatars: &[
                avatar("Classic Barbie", "👱‍♀️", Color32::from_rgb(255, 105, 180), UnlockRequirement::Default),
                Avatar {
                    name: "Princess",
                    emoji: "👸",
                    color: Color32::from_rgb(255, 215, 0),
                    image: None,
                    unlock: UnlockRequirement::Streak(7),
                    description: Some("Keep a streak for a week"),
                },
                Avatar {
                    name: "Mermaid",
                    emoji: "🧜‍♀️",
                    color: Color32::from_rgb(0, 206, 209),
                    image: None,
                    unlock: UnlockRequirement::Tasks(25),
                    description: Some("Complete 25 tasks"),
                },
                Avatar {
                    name: "Astronaut",
                    emoji: "👩‍🚀",
                    color: Color32::from_rgb(65, 105, 225),
                    image: None,
                    unlock: UnlockRequirement::Points(1000),
                    description: Some("Earn 1000 lifetime points"),
                },
            ],
        },
    ),
    (
        "pokemon",
        Theme {
            display_name: "Pokémon",
            palette: Palette {
                primary: Color32::from_rgb(255, 0, 0),
                secondary: Color32::from_rgb(255, 222, 0),
                accent: Color32::from_rgb(59, 76, 202),
                background: [Color32::from_rgb(255, 0, 0), Color32::from_rgb(255, 222, 0)],
            },
            icons: IconSet {
                points: "⚡",
                task: "🎯",
                reward: "🏆",
                complete: "✅",
                pending: "⏳",
                streak: "🔥",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/pokemon-caught.mp3",
                points_earn: "/static/sounds/pokemon-level.mp3",
            },
            avatars: &[
                avatar("Pikachu", "⚡", Color32::from_rgb(255, 222, 0), UnlockRequirement::Default),
                Avatar {
                    name: "Charizard",
                    emoji: "🔥",
                    color: Color32::from_rgb(255, 69, 0),
                    image: None,
                    unlock: UnlockRequirement::Points(1000),
                    description: Some("Earn 1000 lifetime points"),
                },
                Avatar {
                    name: "Squirtle",
                    emoji: "💧",
                    color: Color32::from_rgb(30, 144, 255),
                    image: None,
                    unlock: UnlockRequirement::Streak(3),
                    description: Some("Three-day streak"),
                },
                Avatar {
                    name: "Bulbasaur",
                    emoji: "🌿",
                    color: Color32::from_rgb(50, 205, 50),
                    image: None,
                    unlock: UnlockRequirement::Tasks(25),
                    description: Some("Complete 25 tasks"),
                },
            ],
        },
    ),
    (
        "ninjaturtles",
        Theme {
            display_name: "Ninja Turtles",
            palette: Palette {
                primary: Color32::from_rgb(0, 160, 0),
                secondary: Color32::from_rgb(255, 140, 0),
                accent: Color32::from_rgb(255, 215, 0),
                background: [Color32::from_rgb(0, 160, 0), Color32::from_rgb(34, 139, 34)],
            },
            icons: IconSet {
                points: "🍕",
                task: "🥋",
                reward: "🗡️",
                complete: "✅",
                pending: "⏱️",
                streak: "🔥",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/turtle-cowabunga.mp3",
                points_earn: "/static/sounds/turtle-ding.mp3",
            },
            avatars: &[
                avatar("Leonardo", "🔵", Color32::from_rgb(0, 0, 255), UnlockRequirement::Default),
                avatar("Michelangelo", "🟠", Color32::from_rgb(255, 140, 0), UnlockRequirement::Default),
                Avatar {
                    name: "Donatello",
                    emoji: "🟣",
                    color: Color32::from_rgb(128, 0, 128),
                    image: None,
                    unlock: UnlockRequirement::Streak(7),
                    description: Some("One-week streak"),
                },
                Avatar {
                    name: "Raphael",
                    emoji: "🔴",
                    color: Color32::from_rgb(255, 0, 0),
                    image: None,
                    unlock: UnlockRequirement::Tasks(50),
                    description: Some("Complete 50 tasks"),
                },
            ],
        },
    ),
    (
        "mario",
        Theme {
            display_name: "Super Mario",
            palette: Palette {
                primary: Color32::from_rgb(229, 37, 33),
                secondary: Color32::from_rgb(254, 222, 0),
                accent: Color32::from_rgb(4, 156, 216),
                background: [Color32::from_rgb(229, 37, 33), Color32::from_rgb(254, 222, 0)],
            },
            icons: IconSet {
                points: "⭐",
                task: "🍄",
                reward: "👑",
                complete: "✅",
                pending: "⏰",
                streak: "🔥",
            },
            sounds: SoundSet {
                task_complete: "/static/sounds/mario-coin.mp3",
                points_earn: "/static/sounds/mario-powerup.mp3",
            },
            avatars: &[
                avatar("Mario", "🔴", Color32::from_rgb(229, 37, 33), UnlockRequirement::Default),
                avatar("Luigi", "🟢", Color32::from_rgb(0, 165, 80), UnlockRequirement::Default),
                Avatar {
                    name: "Princess Peach",
                    emoji: "👸",
                    color: Color32::from_rgb(255, 183, 197),
                    image: None,
                    unlock: UnlockRequirement::Streak(7),
                    description: Some("One-week streak"),
                },
                Avatar {
                    name: "Yoshi",
                    emoji: "🦖",
                    color: Color32::from_rgb(0, 165, 80),
                    image: None,
                    unlock: UnlockRequirement::Streak(14),
                    description: Some("Two-week streak"),
                },
                Avatar {
                    name: "Toad",
                    emoji: "🍄",
                    color: Color32::from_rgb(255, 0, 0),
                    image: None,
                    unlock: UnlockRequirement::Tasks(10),
                    description: Some("Complete 10 tasks"),
                },
                Avatar {
                    name: "Bowser",
                    emoji: "🐲",
                    color: Color32::from_rgb(34, 139, 34),
                    image: None,
                    unlock: UnlockRequirement::Tasks(100),
                    description: Some("Complete 100 tasks"),
                },
                Avatar {
                    name: "Wario",
                    emoji: "🟡",
                    color: Color32::from_rgb(255, 215, 0),
                    image: None,
                    unlock: UnlockRequirement::Points(500),
                    description: Some("Earn 500 lifetime points"),
                },
                Avatar {
                    name: "Princess Daisy",
                    emoji: "🌼",
                    color: Color32::from_rgb(255, 165, 0),
                    image: None,
                    unlock: UnlockRequirement::Kindness(5),
                    description: Some("Five acts of kindness"),
                },
                Avatar {
                    name: "Waluigi",
                    emoji: "🟣",
                    color: Color32::from_rgb(128, 0, 128),
                    image: None,
                    unlock: UnlockRequirement::Streak(30),
                    description: Some("Thirty-day streak"),
                },
                Avatar {
                    name: "Donkey Kong",
                    emoji: "🦍",
                    color: Color32::from_rgb(139, 69, 19),
                    image: None,
                    unlock: UnlockRequirement::Points(2500),
                    description: Some("Earn 2500 lifetime points"),
                },
            ],
        },
    ),
];
