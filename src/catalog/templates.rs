//! Static task template data

use super::DayType::{Anyday, Weekday, Weekend};
use super::PeriodOfDay::{Anytime, Evening, Morning};
use super::{DayType, PeriodOfDay, TaskTemplate};

const fn task(
    title: &'static str,
    icon: &'static str,
    points: u32,
    period: PeriodOfDay,
    day_type: DayType,
    requires_approval: bool,
) -> TaskTemplate {
    TaskTemplate {
        title,
        icon,
        points,
        period,
        day_type,
        requires_approval,
        description: None,
    }
}

const fn task_desc(
    title: &'static str,
    icon: &'static str,
    points: u32,
    period: PeriodOfDay,
    day_type: DayType,
    requires_approval: bool,
    description: &'static str,
) -> TaskTemplate {
    TaskTemplate {
        title,
        icon,
        points,
        period,
        day_type,
        requires_approval,
        description: Some(description),
    }
}

pub(super) static CATALOG: &[(&str, &[TaskTemplate])] = &[
    (
        "Morning Tasks (Anyday)",
        &[
            task("Eat Breakfast", "🍳", 50, Morning, Anyday, false),
            task("Brush Teeth", "🪥", 40, Morning, Anyday, false),
            task("Get Dressed", "👕", 25, Morning, Anyday, false),
            task("Take Medicine", "💊", 60, Morning, Anyday, false),
        ],
    ),
    (
        "Morning Tasks (Weekday)",
        &[
            task("Backpack Organized", "🎒", 30, Morning, Weekday, false),
            task("Socks and Shoes", "🧦", 20, Morning, Weekday, false),
            task("Fill Water Bottle for School", "💧", 30, Morning, Weekday, false),
            task_desc(
                "Perfect Morning Routine",
                "⭐",
                85,
                Morning,
                Weekday,
                true,
                "All morning tasks done without reminders",
            ),
        ],
    ),
    (
        "Evening Tasks (Anyday)",
        &[
            task("Doors Closed and Locked", "🔒", 45, Evening, Anyday, false),
            task("Key Put Away", "🔑", 25, Evening, Anyday, false),
            task("Shoes Put Away", "👟", 30, Evening, Anyday, false),
            task("Room Clean", "🧹", 60, Evening, Anyday, false),
            task("Reading 15 Minutes", "📚", 70, Evening, Anyday, false),
            task("Laundry in Basement", "👔", 40, Evening, Anyday, false),
            task("Gate Closed", "🚪", 35, Evening, Anyday, false),
            task_desc(
                "Bedtime Routine On Time",
                "🌙",
                55,
                Evening,
                Anyday,
                false,
                "In bed at designated bedtime",
            ),
        ],
    ),
    (
        "Evening Tasks (Weekday)",
        &[
            task("Homework Completed", "📚", 80, Evening, Weekday, false),
            task_desc(
                "Study Session (30 min)",
                "📖",
                50,
                Evening,
                Weekday,
                false,
                "Focused studying without distractions",
            ),
        ],
    ),
    (
        "Evening Tasks (Weekend)",
        &[
            task("Family Time Activity", "👨‍👩‍👧", 80, Evening, Weekend, true),
            task("Reading 30 Minutes", "📖", 100, Evening, Weekend, false),
            task("Prepare for Next Week", "📅", 50, Evening, Weekend, false),
        ],
    ),
    (
        "Academic Excellence",
        &[
            task_desc(
                "Perfect Test/Quiz Score",
                "💯",
                150,
                Anytime,
                Anyday,
                true,
                "100% or A+ on any test or quiz",
            ),
            task_desc(
                "Good Email from Teacher",
                "✉️",
                100,
                Anytime,
                Anyday,
                true,
                "Positive feedback from teacher",
            ),
            task_desc(
                "Improved Grade",
                "📈",
                125,
                Anytime,
                Anyday,
                true,
                "Grade goes up in any subject",
            ),
            task_desc(
                "Extra Credit Assignment",
                "⭐",
                80,
                Anytime,
                Anyday,
                true,
                "Completing optional work",
            ),
            task_desc(
                "No Missing Assignments",
                "✅",
                90,
                Anytime,
                Anyday,
                true,
                "All homework turned in on time (weekly check)",
            ),
        ],
    ),
    (
        "Health & Fitness",
        &[
            task_desc(
                "Exercise 20 Minutes",
                "🏃",
                60,
                Anytime,
                Anyday,
                false,
                "Running, biking, sports, or active play",
            ),
            task_desc(
                "Drink 4 Glasses of Water",
                "💧",
                40,
                Anytime,
                Anyday,
                false,
                "Staying hydrated throughout day",
            ),
            task_desc(
                "Healthy Snack Choice",
                "🍎",
                30,
                Anytime,
                Anyday,
                false,
                "Choosing fruit/vegetables over junk food",
            ),
            task_desc(
                "Outside Play 30 Minutes",
                "🌳",
                50,
                Anytime,
                Anyday,
                false,
                "Fresh air and outdoor activity",
            ),
        ],
    ),
    (
        "Character & Behavior",
        &[
            task_desc(
                "Act of Kindness",
                "💖",
                75,
                Anytime,
                Anyday,
                true,
                "Helping sibling, friend, or stranger without being asked",
            ),
            task_desc(
                "Good Attitude All Day",
                "😊",
                60,
                Evening,
                Anyday,
                true,
                "No complaining, positive interactions",
            ),
            task_desc(
                "Respectful Communication",
                "🗣️",
                50,
                Anytime,
                Anyday,
                true,
                "Using please/thank you, speaking politely",
            ),
            task_desc(
                "Sharing with Sibling",
                "🤝",
                40,
                Anytime,
                Anyday,
                true,
                "Sharing toys, games, or activities willingly",
            ),
            task_desc(
                "Following Directions First Time",
                "👂",
                45,
                Anytime,
                Anyday,
                true,
                "Listening and responding immediately",
            ),
        ],
    ),
    (
        "Extra Household Tasks",
        &[
            task_desc(
                "Help Make Dinner",
                "🍳",
                65,
                Evening,
                Anyday,
                false,
                "Assisting with meal preparation",
            ),
            task_desc(
                "Set/Clear Table",
                "🍽️",
                35,
                Evening,
                Anyday,
                false,
                "Mealtime responsibilities",
            ),
            task_desc("Take Out Trash", "🗑️", 45, Anytime, Anyday, false, "Without being asked"),
            task_desc(
                "Vacuum/Sweep Room",
                "🧹",
                55,
                Anytime,
                Weekend,
                false,
                "Deep cleaning task",
            ),
            task_desc(
                "Organize Closet/Drawers",
                "👔",
                70,
                Anytime,
                Weekend,
                false,
                "Folding and organizing clothes",
            ),
            task_desc(
                "Help with Laundry",
                "🧺",
                50,
                Anytime,
                Weekend,
                false,
                "Sorting, folding, or putting away",
            ),
            task_desc(
                "Clean Bathroom",
                "🚽",
                80,
                Anytime,
                Weekend,
                false,
                "Sink, mirror, counter",
            ),
            task_desc(
                "Help with Chores",
                "🏠",
                70,
                Anytime,
                Anyday,
                false,
                "General household help",
            ),
        ],
    ),
    (
        "Creative & Personal Development",
        &[
            task_desc(
                "Practice Instrument",
                "🎹",
                60,
                Anytime,
                Anyday,
                false,
                "Music practice session",
            ),
            task_desc(
                "Art/Drawing Project",
                "🎨",
                50,
                Anytime,
                Anyday,
                false,
                "Creative expression",
            ),
            task_desc(
                "Journal Entry",
                "📔",
                40,
                Evening,
                Anyday,
                false,
                "Writing thoughts or daily reflection",
            ),
            task_desc(
                "Learn Something New",
                "🧠",
                75,
                Anytime,
                Anyday,
                true,
                "Teaching family about new topic learned",
            ),
        ],
    ),
    (
        "Bonus Challenges",
        &[
            task_desc(
                "Zero Screen Time Day",
                "📵",
                200,
                Anytime,
                Anyday,
                true,
                "Full day without TV, tablet, or games",
            ),
            task_desc(
                "Read Entire Book",
                "📚",
                150,
                Anytime,
                Anyday,
                true,
                "Complete age-appropriate book",
            ),
            task_desc(
                "Complete Weekly Goal",
                "🎯",
                100,
                Anytime,
                Weekend,
                true,
                "Achieve personal goal set at week start",
            ),
        ],
    ),
];
