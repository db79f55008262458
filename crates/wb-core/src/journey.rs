//! "Journey West": Eli Klunder's move from Michigan to Las Vegas.

use crate::error::StoryResult;
use crate::graph::{StoryGraph, StoryMeta};
use crate::node::StoryNode;

/// Identifier of the node every playthrough starts at: the job-offer decision.
pub const START_NODE: &str = "offer";

/// Identifier of the node at which the journey map is announced.
pub const MAP_CHECKPOINT: &str = "travel_method";

/// Choices that play the sample path used by `--demo`.
pub const DEMO_SCRIPT: [&str; 8] = ["1", "1", "2", "1", "1", "1", "1", "1"];

/// Build the built-in story graph.
///
/// The graph is validated on construction; an error here is a defect in the
/// story data, not in player input.
pub fn journey_west() -> StoryResult<StoryGraph> {
    StoryGraph::builder(StoryMeta::new("Michigan to Las Vegas", "Eli", START_NODE))
        .map_checkpoint(MAP_CHECKPOINT)
        .landmark("Lansing", -320.0, 120.0)
        .landmark("Chicago", -220.0, 60.0)
        .landmark("Denver", -50.0, 40.0)
        .landmark("Las Vegas", 230.0, -40.0)
        .node(
            "offer",
            StoryNode::new(
                "The Offer Letter",
                "Eli Klunder just graduated from Michigan State University. \
                 The Circa Management Trainee program in Las Vegas sent an offer. \
                 Does he accept and start packing for the desert, or stay in Michigan?",
            )
            .with_choice(
                '1',
                "Accept the job offer and chase the Vegas adventure",
                "travel_method",
            )
            .with_choice('2', "Stay in Michigan and postpone the move", "stay_home"),
        )
        .node(
            "stay_home",
            StoryNode::new(
                "Staying Put",
                "Eli keeps his Spartan roots in Michigan for now. The Strip will have to wait, \
                 but the Circa team sends a friendly note encouraging him to reapply later.",
            ),
        )
        .node(
            "travel_method",
            StoryNode::new(
                "Planning the Move",
                "With the offer accepted, Eli must choose how to travel west. A road trip offers \
                 open highways, but a flight would get him to training faster.",
            )
            .with_choice('1', "Drive cross-country with playlists and podcasts", "drive_prep")
            .with_choice('2', "Fly to Las Vegas and ship the essentials", "fly_prep"),
        )
        .node(
            "drive_prep",
            StoryNode::new(
                "Packing the Car",
                "Eli loads his hatchback. He can overpack with souvenirs from East Lansing or \
                 travel light to keep the car nimble over the Rockies.",
            )
            .with_choice(
                '1',
                "Pack heavy: memorabilia, winter coats, and gadgets",
                "midwest_leg",
            )
            .with_choice(
                '2',
                "Minimalist: only essentials and a lucky MSU pennant",
                "midwest_leg",
            ),
        )
        .node(
            "midwest_leg",
            StoryNode::new(
                "Crossing the Midwest",
                "The Michigan sunsets fade in the rearview. Eli approaches Chicago and debates \
                 a detour.",
            )
            .with_choice(
                '1',
                "Stop in Chicago for deep dish and a skyline photo",
                "great_plains",
            )
            .with_choice('2', "Push straight through toward the Great Plains", "great_plains"),
        )
        .node(
            "great_plains",
            StoryNode::new(
                "Great Plains Night",
                "Nebraska's open skies stretch for miles. The road hums under Eli's tires.",
            )
            .with_choice('1', "Camp under the stars to recharge", "rockies")
            .with_choice('2', "Drive overnight with neon podcasts", "rockies"),
        )
        .node(
            "rockies",
            StoryNode::new(
                "Rocky Mountain Pass",
                "Mountain air greets Eli near Denver. He must choose between speed and scenery.",
            )
            .with_choice(
                '1',
                "Take the scenic route through mountain towns",
                "vegas_arrival",
            )
            .with_choice(
                '2',
                "Stick to the interstate to arrive ahead of schedule",
                "vegas_arrival",
            ),
        )
        .node(
            "fly_prep",
            StoryNode::new(
                "Booking the Flight",
                "A one-way ticket from Detroit to Las Vegas pops up with a layover in Denver. \
                 Eli balances cost against comfort for the big leap.",
            )
            .with_choice('1', "Choose the cheap redeye and nap on the plane", "airport_wait")
            .with_choice('2', "Pick the daytime flight with a window seat", "airport_wait"),
        )
        .node(
            "airport_wait",
            StoryNode::new(
                "Airport Vibes",
                "Suitcase tagged for LAS, Eli has time before boarding. He can grind through \
                 onboarding paperwork or explore the terminal.",
            )
            .with_choice('1', "Finish Circa onboarding modules early", "vegas_arrival")
            .with_choice('2', "Chat with fellow travelers about Vegas tips", "vegas_arrival"),
        )
        .node(
            "vegas_arrival",
            StoryNode::new(
                "Welcome to Las Vegas",
                "After miles or miles above the clouds, the Strip's glow rises. Circa's \
                 Management Trainee program begins Monday, but Eli has the weekend to settle \
                 in and choose his vibe.",
            )
            .with_choice('1', "Explore Fremont Street with new teammates", "first_weekend")
            .with_choice(
                '2',
                "Spend a quiet evening organizing his apartment",
                "first_weekend",
            ),
        )
        .node(
            "first_weekend",
            StoryNode::new(
                "First Weekend Decisions",
                "Eli's choices set the tone for his Vegas chapter. The city is wide open, and \
                 the Circa team is ready.",
            )
            .with_choice(
                '1',
                "Celebrate with a rooftop view and envision the career ahead",
                "ending_rooftop",
            )
            .with_choice(
                '2',
                "Take a sunrise jog on the Strip to center himself",
                "ending_sunrise",
            ),
        )
        .node(
            "ending_rooftop",
            StoryNode::new(
                "Rooftop Resolve",
                "Music and neon spill across the skyline. Eli toasts to the Circa program, \
                 feeling ready to learn, lead, and represent his Spartan grit in a new city.",
            ),
        )
        .node(
            "ending_sunrise",
            StoryNode::new(
                "Sunrise Focus",
                "Cool desert air and sunrise colors calm his nerves. The Management Trainee \
                 badge sits on his desk, waiting for Monday's first briefing.",
            ),
        )
        .build()
}
