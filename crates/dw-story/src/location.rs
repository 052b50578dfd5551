//! Locations, what they show, and where each answer leads.
//!
//! A [`Node`] is evaluated in two halves against the same world state:
//! [`Node::scene`] renders narration and an optional [`Prompt`], and
//! [`Node::transition`] consumes the parsed answer, applies its side effects,
//! and names the next [`Step`]. Nodes without a prompt transition on `None`.
//!
//! Every menu except the crossroads fan-out and the bear carcass ends with an
//! inventory entry that lists the player's items and loops back.

use dw_core::{ChestOutcome, Flag, WorldState};
use dw_mechanics::{CombatMode, CombatReport, EnemyKind};

use crate::error::{StoryError, StoryResult};
use crate::prompt::{Prompt, Token};

/// A place in the adventure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// Waking in the cave.
    Intro,
    /// Choose the player's attack power.
    ChooseAttack,
    /// Choose the player's armor class, once attack is known.
    ChooseArmor {
        /// Attack power entered on the previous prompt.
        attack: u32,
    },
    /// The main menu outside the cave.
    Outskirts,
    /// The abandoned village.
    Village,
    /// Talking to the village elder.
    Elder,
    /// The forest edge.
    Forest,
    /// A dire wolf blocks the way.
    WolfEncounter,
    /// Where the three deep paths split.
    Crossroads,
    /// The abandoned houses on the mountain plateau.
    Mountain,
    /// The sealed ark carved into the rock.
    Ark,
    /// The plateau below the summit.
    Summit,
    /// The dragon lands.
    DragonDescends,
    /// The final battle.
    DragonFight,
    /// The darkening trees where the bear lives.
    DeeperForest,
    /// The bear has just been killed.
    BearCarcass,
    /// A dead end.
    Ravine,
    /// The misty lake shore.
    Stream,
    /// The island in the lake.
    Island,
    /// The player has been defeated.
    Fallen,
    /// The dragon is dead.
    Epilogue,
}

/// What a node shows before asking anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    /// Narration lines, in order.
    pub lines: Vec<String>,
    /// The question to ask, if any.
    pub prompt: Option<Prompt>,
}

/// Where the game goes after a node resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to a node (possibly the same one).
    Goto(Node),
    /// Run a fight, then dispatch with [`after_combat`].
    Fight(EnemyKind, CombatMode),
    /// Reset the world and start again from the introduction.
    Restart,
    /// The adventure is complete.
    Finish,
}

/// The result of resolving a node: narration to show and the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Narration produced by the choice.
    pub lines: Vec<String>,
    /// What happens next.
    pub step: Step,
}

impl Transition {
    fn to(node: Node) -> Self {
        Self {
            lines: Vec::new(),
            step: Step::Goto(node),
        }
    }

    fn say(lines: &[&str], node: Node) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            step: Step::Goto(node),
        }
    }

    fn lines(lines: Vec<String>, node: Node) -> Self {
        Self {
            lines,
            step: Step::Goto(node),
        }
    }

    fn step(step: Step) -> Self {
        Self {
            lines: Vec::new(),
            step,
        }
    }
}

impl Scene {
    fn narrate(lines: &[&str]) -> Self {
        Self {
            lines: owned(lines),
            prompt: None,
        }
    }

    fn ask(lines: &[&str], prompt: Prompt) -> Self {
        Self {
            lines: owned(lines),
            prompt: Some(prompt),
        }
    }

    fn menu(header: &[&str], entries: &[&str]) -> Self {
        let mut lines = owned(header);
        lines.extend(
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{}. {entry}", i + 1)),
        );
        let count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
        Self {
            lines,
            prompt: Some(Prompt::menu(count)),
        }
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// The item listing shown by every inventory menu entry.
pub fn inventory_lines(world: &WorldState) -> Vec<String> {
    let items = world.inventory().items();
    if items.is_empty() {
        return vec!["Your pack is empty.".to_string()];
    }
    let mut lines = vec!["You are carrying:".to_string()];
    lines.extend(items.iter().map(|item| format!(" - {item}")));
    lines
}

const FIGHT_QUESTION: &str = "Fight automatically, or roll each attack yourself?";

impl Node {
    /// The entry point of every playthrough.
    pub const START: Node = Node::Intro;

    /// Display name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::ChooseAttack => "choose attack",
            Self::ChooseArmor { .. } => "choose armor",
            Self::Outskirts => "outskirts",
            Self::Village => "village",
            Self::Elder => "elder",
            Self::Forest => "forest",
            Self::WolfEncounter => "wolf encounter",
            Self::Crossroads => "crossroads",
            Self::Mountain => "mountain",
            Self::Ark => "ark",
            Self::Summit => "summit",
            Self::DragonDescends => "dragon descends",
            Self::DragonFight => "dragon fight",
            Self::DeeperForest => "deeper forest",
            Self::BearCarcass => "bear carcass",
            Self::Ravine => "ravine",
            Self::Stream => "stream",
            Self::Island => "island",
            Self::Fallen => "fallen",
            Self::Epilogue => "epilogue",
        }
    }

    /// Render what the player sees on arriving here.
    pub fn scene(self, world: &WorldState) -> Scene {
        match self {
            Self::Intro => Scene::narrate(&[
                "You come to on the floor of a cold, dripping cave.",
                "Moss and something rotten hang in the air, and a guttering torch throws shadows across the rock.",
                "You remember falling. You do not remember landing. Whatever brought you here, you need a way out.",
            ]),
            Self::ChooseAttack => Scene::ask(&[], Prompt::number("Enter attack power: ")),
            Self::ChooseArmor { .. } => {
                Scene::ask(&[], Prompt::number("Enter armor class (max 20): "))
            }
            Self::Outskirts => Scene::menu(
                &["", "Where do you go from here?"],
                &[
                    "Into the dark forest",
                    "Toward the lights of the village",
                    "Stay where you are for now",
                    "Check your inventory",
                ],
            ),
            Self::Village => Scene::menu(
                &[
                    "",
                    "The village is silent. Doors hang open and nothing moves in the streets.",
                ],
                &[
                    "Speak with the village elder",
                    "Look around the village",
                    "Go back to the outskirts",
                    "Check your inventory",
                ],
            ),
            Self::Elder => elder_scene(world),
            Self::Forest => Scene::menu(
                &["", "Tall trees close in around you and the light thins."],
                &[
                    "Look around the forest",
                    "Confront the dire wolf",
                    "Go back to the outskirts",
                    "Check your inventory",
                ],
            ),
            Self::WolfEncounter => Scene::ask(
                &["Two yellow eyes open in the undergrowth. A dire wolf slinks out, teeth bared."],
                Prompt::fight_mode(FIGHT_QUESTION),
            ),
            Self::Crossroads => Scene::menu(
                &[
                    "",
                    "Past the forest edge the path splits three ways.",
                    "Cold wind pours down from the mountains, the trees ahead grow darker, and somewhere water is running.",
                ],
                &[
                    "Climb the mountain trail",
                    "Push into the darkening trees",
                    "Follow the sound of the stream",
                    "Check your inventory",
                ],
            ),
            Self::Mountain => Scene::menu(
                &[
                    "",
                    "The trail climbs over loose scree to a plateau of empty, sagging houses.",
                    "Someone has scratched a warning into a wall: \"Do not look for us. Only pain waits above.\"",
                ],
                &[
                    "Sleep in one of the houses",
                    "Keep climbing",
                    "Descend to the crossroads",
                    "Check your inventory",
                ],
            ),
            Self::Ark => ark_scene(world),
            Self::Summit => Scene::ask(
                &[
                    "",
                    "Hours later the passage opens onto a wide plateau just under the summit.",
                    "The cold bites through your clothes and black clouds turn slowly overhead.",
                ],
                Prompt::pause("Press ENTER to continue..."),
            ),
            Self::DragonDescends => Scene::ask(
                &[
                    "",
                    "Lightning outlines something enormous inside the clouds.",
                    "A dragon drops onto the plateau, its scales crawling with pale fire, and roars.",
                ],
                Prompt::pause("Press ENTER to face it..."),
            ),
            Self::DragonFight => Scene::ask(&[], Prompt::fight_mode(FIGHT_QUESTION)),
            Self::DeeperForest => {
                if world.flag(Flag::BearDefeated) {
                    Scene::narrate(&[
                        "",
                        "You pass the place where you fought the bear and keep going.",
                    ])
                } else {
                    Scene::ask(
                        &[
                            "",
                            "The branches knit together overhead until it is nearly night.",
                            "A huge shape heaves itself up from behind a fallen trunk. A grizzly bear!",
                        ],
                        Prompt::fight_mode(FIGHT_QUESTION),
                    )
                }
            }
            Self::BearCarcass => Scene::menu(
                &["", "The bear lies still. Its thick pelt could be worth keeping."],
                &[
                    "Skin the bear (+2 armor class)",
                    "Leave it and press on",
                ],
            ),
            Self::Ravine => Scene::narrate(&[
                "",
                "Roots and low branches slow you until the ground simply ends.",
                "A ravine splits the forest, too deep to see the bottom, with nothing to cross it on.",
                "There is no way forward. You head back to the crossroads.",
            ]),
            Self::Stream => Scene::menu(
                &[
                    "",
                    "The stream feeds a small lake wrapped in mist.",
                    "Through the haze you can make out a scrap of land in the middle of the water.",
                ],
                &[
                    "Swim out to the island",
                    "Return to the crossroads",
                    "Check your inventory",
                ],
            ),
            Self::Island => Scene::menu(
                &[
                    "",
                    "Two skeletons lie among fallen trees on the island.",
                    "Near them, a chest pokes half out of the mud.",
                ],
                &[
                    "Search the bodies",
                    "Examine the chest",
                    "Swim back to shore",
                    "Check your inventory",
                ],
            ),
            Self::Fallen => Scene::ask(
                &[
                    "",
                    "Your legs give out and the world goes dark around the edges.",
                    "Everything slips away.",
                ],
                Prompt::pause("Press ENTER to start over."),
            ),
            Self::Epilogue => Scene::ask(
                &[
                    "",
                    "The dragon crashes down with a last, shuddering roar.",
                    "Scorched rock and broken scales are all that is left of the fight.",
                    "Past the summit lies a way out of this place, and whatever comes after.",
                    "",
                    "Victory is yours. Thank you for playing!",
                ],
                Prompt::pause("Press ENTER to exit."),
            ),
        }
    }

    /// Apply the player's answer and decide what comes next.
    ///
    /// The world must be in the same state it was in when [`Node::scene`]
    /// was rendered.
    pub fn transition(
        self,
        token: Option<Token>,
        world: &mut WorldState,
    ) -> StoryResult<Transition> {
        let unexpected = || StoryError::UnexpectedToken {
            node: self.name().to_string(),
            token: format!("{token:?}"),
        };
        let option = |token: Option<Token>| match token {
            Some(Token::Option(n)) => Ok(n),
            _ => Err(unexpected()),
        };
        let fight = |enemy: EnemyKind| match token {
            Some(Token::Mode(mode)) => Ok(Transition::step(Step::Fight(enemy, mode))),
            _ => Err(unexpected()),
        };
        let pause = |step: Step| match token {
            Some(Token::Continue) => Ok(Transition::step(step)),
            _ => Err(unexpected()),
        };

        match self {
            Self::Intro => Ok(Transition::to(Self::ChooseAttack)),
            Self::ChooseAttack => match token {
                Some(Token::Number(attack)) => Ok(Transition::to(Self::ChooseArmor { attack })),
                _ => Err(unexpected()),
            },
            Self::ChooseArmor { attack } => match token {
                Some(Token::Number(armor)) => {
                    world.configure_player(attack, armor);
                    Ok(Transition::lines(
                        vec![
                            String::new(),
                            format!("Your stats: {}", world.player()),
                            String::new(),
                            "Queasy and unsteady, you stagger out of the cave into grey daylight.".to_string(),
                            "Small animal carcasses and snapped logs are strewn around the entrance.".to_string(),
                            "Something dragged them here.".to_string(),
                        ],
                        Self::Outskirts,
                    ))
                }
                _ => Err(unexpected()),
            },
            Self::Outskirts => match option(token)? {
                1 => Ok(Transition::say(
                    &["You leave the clearing and step between the twisted trees."],
                    Self::Forest,
                )),
                2 => Ok(Transition::say(
                    &["You walk toward the village, hoping for shelter or answers."],
                    Self::Village,
                )),
                3 => Ok(Transition::say(
                    &["You stay put for a while and try to collect your thoughts."],
                    Self::Outskirts,
                )),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Outskirts)),
                _ => Err(unexpected()),
            },
            Self::Village => match option(token)? {
                1 => Ok(Transition::to(Self::Elder)),
                2 => Ok(Transition::say(
                    &["You walk the empty streets. Whatever this town was, it is rotting now."],
                    Self::Village,
                )),
                3 => Ok(Transition::to(Self::Outskirts)),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Village)),
                _ => Err(unexpected()),
            },
            Self::Elder => elder_transition(token, world).ok_or_else(&unexpected),
            Self::Forest => match option(token)? {
                1 if world.flag(Flag::HasMagicalSword) => Ok(Transition::to(Self::Crossroads)),
                1 => Ok(Transition::say(
                    &["Among the roots you find broken blades and tracks heading deeper into the woods."],
                    Self::Forest,
                )),
                2 => Ok(Transition::to(Self::WolfEncounter)),
                3 => Ok(Transition::to(Self::Outskirts)),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Forest)),
                _ => Err(unexpected()),
            },
            Self::WolfEncounter => fight(EnemyKind::DireWolf),
            Self::Crossroads => match option(token)? {
                1 => Ok(Transition::to(Self::Mountain)),
                2 => Ok(Transition::to(Self::DeeperForest)),
                3 => Ok(Transition::to(Self::Stream)),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Crossroads)),
                _ => Err(unexpected()),
            },
            Self::Mountain => match option(token)? {
                1 => {
                    let health = world.rest();
                    Ok(Transition::lines(
                        vec![format!(
                            "You sleep in the dust of an empty house and wake restored to {health} health."
                        )],
                        Self::Mountain,
                    ))
                }
                2 => Ok(Transition::to(Self::Ark)),
                3 => Ok(Transition::say(
                    &["You pick your way back down to the crossroads."],
                    Self::Crossroads,
                )),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Mountain)),
                _ => Err(unexpected()),
            },
            Self::Ark => {
                if world.flag(Flag::MagicStoneObtained) {
                    Ok(Transition::to(Self::Summit))
                } else {
                    Ok(Transition::to(Self::Mountain))
                }
            }
            Self::Summit => pause(Step::Goto(Self::DragonDescends)),
            Self::DragonDescends => pause(Step::Goto(Self::DragonFight)),
            Self::DragonFight => fight(EnemyKind::Dragon),
            Self::DeeperForest => {
                if world.flag(Flag::BearDefeated) {
                    Ok(Transition::to(Self::Ravine))
                } else {
                    fight(EnemyKind::GrizzlyBear)
                }
            }
            Self::BearCarcass => match option(token)? {
                1 => {
                    let armor = world.skin_bear();
                    Ok(Transition::lines(
                        vec![format!(
                            "You cut away the heavy pelt and wear it. Your armor class is now {armor}."
                        )],
                        Self::Ravine,
                    ))
                }
                2 => Ok(Transition::say(&["You leave the carcass where it fell."], Self::Ravine)),
                _ => Err(unexpected()),
            },
            Self::Ravine => Ok(Transition::to(Self::Crossroads)),
            Self::Stream => match option(token)? {
                1 => Ok(Transition::say(
                    &[
                        "You wade in. The cold steals your breath and the water below is black.",
                        "Stroke by stroke, you haul yourself onto the island.",
                    ],
                    Self::Island,
                )),
                2 => Ok(Transition::say(
                    &["You turn back. The mist closes behind you."],
                    Self::Crossroads,
                )),
                3 => Ok(Transition::lines(inventory_lines(world), Self::Stream)),
                _ => Err(unexpected()),
            },
            Self::Island => match option(token)? {
                1 => {
                    if world.search_remains() {
                        Ok(Transition::say(
                            &[
                                "The clothes on the bones have rotted to rags.",
                                "Between the ribs of one skeleton you find a small, rusted key.",
                                "It might fit the chest.",
                            ],
                            Self::Island,
                        ))
                    } else {
                        Ok(Transition::say(
                            &["You have already searched the bodies. Nothing else is here."],
                            Self::Island,
                        ))
                    }
                }
                2 => {
                    let lines: &[&str] = match world.open_chest() {
                        ChestOutcome::Locked => {
                            &["The chest is locked. You will need a key."]
                        }
                        ChestOutcome::Opened => &[
                            "The rusted key turns with a groan and the lid swings open.",
                            "Inside lies a smooth stone carved with strange marks and the outline of a mountain.",
                            "It must belong to something up in the mountains.",
                        ],
                        ChestOutcome::AlreadyOpened => {
                            &["The chest is empty apart from a few scraps of rotten cloth."]
                        }
                    };
                    Ok(Transition::say(lines, Self::Island))
                }
                3 => Ok(Transition::say(
                    &["You slip back into the cold water and swim for the shore."],
                    Self::Stream,
                )),
                4 => Ok(Transition::lines(inventory_lines(world), Self::Island)),
                _ => Err(unexpected()),
            },
            Self::Fallen => pause(Step::Restart),
            Self::Epilogue => pause(Step::Finish),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn elder_scene(world: &WorldState) -> Scene {
    let greeting = "An old man with tired, watchful eyes looks up as you approach.";
    if !world.flag(Flag::MagicalSwordFound) {
        Scene::ask(
            &[
                "",
                greeting,
                "\"I carried a magical sword once,\" he says. \"Wolves ran me out of the forest two moons ago",
                "and the blade stayed behind. If you want it, you will have to go through them.",
                "I will not ask it of you.\"",
            ],
            Prompt::yes_no("Will you look for the magical sword?"),
        )
    } else if world.flag(Flag::HasMagicalSword) {
        Scene::narrate(&[
            "",
            greeting,
            "\"You carry my old sword well,\" he says. \"With it you might get through the deep paths",
            "past the forest, and maybe out of this place altogether.\"",
        ])
    } else {
        Scene::ask(
            &[
                "",
                greeting,
                "\"You found it!\" the elder says, staring at the blade. \"I am too old to swing it.",
                "Will you keep it?\"",
            ],
            Prompt::yes_no("Keep the sword?"),
        )
    }
}

fn elder_transition(token: Option<Token>, world: &mut WorldState) -> Option<Transition> {
    let found = world.flag(Flag::MagicalSwordFound);
    let carried = world.flag(Flag::HasMagicalSword);
    let lines: &[&str] = match (found, carried, token) {
        (false, _, Some(Token::Yes)) => {
            world.accept_elder_quest();
            &[
                "",
                "\"Thank you,\" the elder says. \"Come back if you learn where it fell.\"",
                "(Quest accepted: find the magical sword.)",
            ]
        }
        (false, _, Some(Token::No)) => &[
            "",
            "\"I understand. Not everyone should walk into those woods.\"",
            "(You turn the quest down.)",
        ],
        (true, true, None) => &[],
        (true, false, Some(Token::Yes)) => {
            world.claim_magical_sword();
            &[
                "",
                "\"Then let it serve you better than it served me.\"",
                "You hang the sword at your side and feel its strength settle into your arm.",
                "\"With that blade you can go deeper into the forest than anyone has in years.\"",
            ]
        }
        (true, false, Some(Token::No)) => &[
            "",
            "\"Then I will keep it safe. Good luck out there.\"",
        ],
        _ => return None,
    };
    Some(Transition::say(lines, Node::Village))
}

fn ark_scene(world: &WorldState) -> Scene {
    let mut lines = vec![
        "",
        "Higher up, a great ark is carved into the mountainside, green with moss.",
        "A round hollow sits empty at its crown, as if something belongs there.",
    ];
    if world.flag(Flag::MagicStoneObtained) {
        lines.extend([
            "The stone from the island fits the hollow exactly.",
            "Light pours from the carvings and the ark grinds open on a passage into the rock.",
            "You follow it upward for a very long time.",
        ]);
    } else {
        lines.extend([
            "Whatever fits here, you do not have it yet.",
            "You turn back down the trail.",
        ]);
    }
    Scene::narrate(&lines)
}

/// Apply the consequences of a finished fight and pick the next node.
///
/// Every defeat leads to [`Node::Fallen`]. Victories record the kill on the
/// world and continue the story for that enemy.
pub fn after_combat(report: &CombatReport, world: &mut WorldState) -> Transition {
    if !report.player_won() {
        let line = match report.enemy {
            EnemyKind::DireWolf => "The dire wolf drags you down. The forest goes quiet again.",
            EnemyKind::GrizzlyBear => "The bear's weight crushes the breath out of you.",
            EnemyKind::Dragon => "The dragon's fire sweeps over you and you fall on the frozen stone.",
        };
        return Transition::say(&[line], Node::Fallen);
    }

    match report.enemy {
        EnemyKind::DireWolf => {
            let tally = world.record_wolf_kill();
            let mut lines = vec![format!("The dire wolf falls. Wolves slain: {}.", tally.count)];
            if tally.sword_revealed {
                lines.push(
                    "As the last wolf drops, something glints in the ferns: a blade, humming faintly."
                        .to_string(),
                );
                lines.push("Could this be the elder's magical sword?".to_string());
            }
            Transition::lines(lines, Node::Forest)
        }
        EnemyKind::GrizzlyBear => {
            world.record_bear_defeat();
            Transition::say(&["With one last blow you bring the grizzly down!"], Node::BearCarcass)
        }
        EnemyKind::Dragon => {
            world.record_dragon_defeat();
            Transition::say(&["The dragon lets out a deafening roar and collapses!"], Node::Epilogue)
        }
    }
}
