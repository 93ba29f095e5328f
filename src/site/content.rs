//! Static site content.
//!
//! Everything the page displays lives in [`SiteContent`], built once at start
//! and handed to the state by value.

use chrono::NaiveDate;

/// Entry of the floating navigation bar.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights: Vec<&'static str>,
    pub calls_to_action: Vec<(&'static str, &'static str)>, // label, target section
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct About {
    pub heading: &'static str,
    pub story: &'static str,
    pub founder_name: &'static str,
    pub founder_title: &'static str,
    pub founder_bio: &'static str,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Training,
    Gaming,
    Simulator,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Training => "training",
            ProjectCategory::Gaming => "gaming",
            ProjectCategory::Simulator => "simulator",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub stack: Vec<&'static str>,
    pub date: NaiveDate,
}

/// A use case shown in the applications section.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: Vec<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PillarKey {
    Ue5,
    Cpp,
    Blender,
    Vr,
}

/// A technology the studio builds on.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pillar {
    pub key: PillarKey,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: Vec<&'static str>,
    pub capabilities: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CultureValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessStage {
    pub key: &'static str,
    pub label: &'static str,
    pub summary: &'static str,
    pub points: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub headline: &'static str,
    pub subheading: &'static str,
    pub members: Vec<TeamMember>,
    pub values: Vec<CultureValue>,
    pub stages: Vec<ProcessStage>,
    pub default_stage: &'static str,
}

/// Complete set of copy and catalog data rendered by the page.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub gaming_scenarios: Vec<Scenario>,
    pub training_scenarios: Vec<Scenario>,
    pub pillars: Vec<Pillar>,
    pub team: Team,
    pub contact_channels: Vec<ContactChannel>,
}

impl SiteContent {
    /// Section ids of the navigation links, in display order.
    ///
    pub fn link_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.links.iter().map(|link| link.id)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent {
            brand: "Inexia",
            links: vec![
                NavLink { id: "about", label: "About" },
                NavLink { id: "projects", label: "Projects" },
                NavLink { id: "technology", label: "Technology" },
                NavLink { id: "team", label: "Team" },
                NavLink { id: "contact", label: "Contact" },
            ],
            hero: Hero {
                eyebrow: "Inexia VR Studio",
                title: "Next-Gen VR Gaming & Training",
                subtitle: "Inexia crafts immersive simulations and next-gen experiences with \
                    Unreal Engine 5, procedural systems, and real-time 3D to advance VR \
                    gaming, training, and human performance.",
                highlights: vec!["Smooth Motion", "Spatial Presence", "Multi-Platform"],
                calls_to_action: vec![
                    ("Explore Our Work", "projects"),
                    ("Start a Project", "contact"),
                ],
            },
            about: About {
                heading: "Founding Story",
                story: "Inexia VR began as a research lab exploring how people learn and play \
                    inside simulated worlds. Today we ship production simulators, gaming \
                    prototypes and training platforms for partners worldwide.",
                founder_name: "Mayank Pratap Singh",
                founder_title: "Founder & CEO, Inexia VR",
                founder_bio: "Engineer and researcher with deep experience in AI/ML, robotics, \
                    and human–computer interaction. Mayank leads Inexia VR with a vision to \
                    fuse spatial computing, embodied intelligence, and humane design to build \
                    the next generation of immersive interfaces.",
                stats: vec![
                    Stat { label: "Years in R&D", value: "10+" },
                    Stat { label: "Patents/Papers", value: "12" },
                ],
            },
            projects: vec![
                Project {
                    id: "vr-firefighter",
                    title: "VR Firefighter Training Simulator",
                    category: ProjectCategory::Simulator,
                    description: "Immersive hazard recognition and response simulator \
                        replicating smoke dynamics, heat zones, and interactive equipment \
                        handling for high-fidelity skill acquisition.",
                    features: vec![
                        "Dynamic fire propagation and smoke simulation",
                        "Interactive nozzle control with pressure feedback",
                        "Scenario authoring with branching outcomes",
                        "Biometric performance tracking",
                    ],
                    stack: vec!["Unreal Engine 5", "C++", "Blender"],
                    date: date(2024, 7, 20),
                },
                Project {
                    id: "mechanics-lab",
                    title: "Interactive Gaming Mechanics Lab",
                    category: ProjectCategory::Gaming,
                    description: "Sandbox environment to prototype locomotion, haptics, and \
                        physics-driven gameplay loops with rapid iteration and live parameter \
                        tuning.",
                    features: vec![
                        "Modular locomotion system (teleport, slide, hybrid)",
                        "Real-time physics tweaker and profiler",
                        "Haptic event editor",
                        "Recording and replay for A/B testing",
                    ],
                    stack: vec!["Unreal Engine 5", "C++", "Blender"],
                    date: date(2024, 5, 10),
                },
                Project {
                    id: "skills-platform",
                    title: "Professional Skills Training Platform",
                    category: ProjectCategory::Training,
                    description: "Scenario-based roleplay for soft skills and procedures with \
                        analytics, adaptive difficulty, and enterprise deployment support.",
                    features: vec![
                        "Adaptive scenarios with competency rubrics",
                        "Voice-driven interactions and prompts",
                        "SCORM/xAPI progress reporting",
                        "Multi-user facilitator mode",
                    ],
                    stack: vec!["Unreal Engine 5", "C++", "Blender"],
                    date: date(2024, 8, 12),
                },
            ],
            gaming_scenarios: vec![
                Scenario {
                    key: "immersive-worlds",
                    title: "Immersive Worlds",
                    description: "Create expansive VR environments with realistic physics, \
                        volumetric audio, and procedural events that adapt to the player.",
                    benefits: vec![
                        "Dynamic storytelling systems",
                        "Haptics-ready interactions",
                        "Low-latency streaming",
                    ],
                },
                Scenario {
                    key: "multiplayer-sessions",
                    title: "Multiplayer Sessions",
                    description: "Seamless co-op and competitive play with spatial voice, \
                        presence indicators, and synchronized world states.",
                    benefits: vec![
                        "Cross-device sync",
                        "Matchmaking primitives",
                        "Anti-cheat hooks",
                    ],
                },
                Scenario {
                    key: "creator-tools",
                    title: "Creator Tools",
                    description: "In-headset level editing and prototyping with node-based \
                        logic and instant iteration feedback.",
                    benefits: vec!["No-code blocks", "Prefab libraries", "Live reload"],
                },
            ],
            training_scenarios: vec![
                Scenario {
                    key: "procedural-training",
                    title: "Procedural Training",
                    description: "Step-by-step guided simulations for SOPs and compliance with \
                        performance tracking and remediation paths.",
                    benefits: vec![
                        "Analytics-ready events",
                        "Progress checkpoints",
                        "Adaptive difficulty",
                    ],
                },
                Scenario {
                    key: "remote-coaching",
                    title: "Remote Coaching",
                    description: "Instructor-led sessions with synchronized playback, pointer \
                        tools, and shared perspectives for rapid upskilling.",
                    benefits: vec!["Session recordings", "Multicam views", "Role-based access"],
                },
                Scenario {
                    key: "spatial-design-review",
                    title: "Spatial Design Review",
                    description: "Real-scale visualization of products and spaces with \
                        annotation layers and versioned snapshots.",
                    benefits: vec!["CAD import", "Accurate scale", "Collaborative markup"],
                },
            ],
            pillars: vec![
                Pillar {
                    key: PillarKey::Ue5,
                    title: "Unreal Engine 5",
                    summary: "Nanite + Lumen rendering, modular gameplay architecture, robust \
                        build tooling.",
                    details: vec![
                        "Enhanced Input, GAS-lite patterns, Subsystems",
                        "Niagara VFX, Chaos Physics, World Partition",
                        "Editor Utility Tools, Data Assets driven config",
                    ],
                    capabilities: vec!["Lumen GI", "Nanite", "Chaos", "Niagara"],
                },
                Pillar {
                    key: PillarKey::Cpp,
                    title: "C++ Development",
                    summary: "High-performance systems with strict memory and threading \
                        discipline.",
                    details: vec![
                        "ECS-inspired data locality, hot paths profiled",
                        "Lock-free queues, task graph alignment",
                        "Unreal reflection & build toolchain mastery",
                    ],
                    capabilities: vec!["ECS", "SIMD", "Async", "Profiling"],
                },
                Pillar {
                    key: PillarKey::Blender,
                    title: "Blender Pipeline",
                    summary: "Non-destructive modeling, UV, and USD/FBX export with automated \
                        checks.",
                    details: vec![
                        "Procedural materials, trim sheets, texel density",
                        "Geometry Nodes for parametric assets",
                        "USD/FBX export, scale/unit sanity, LODs",
                    ],
                    capabilities: vec!["USD/FBX", "Geo Nodes", "LOD", "PBR"],
                },
                Pillar {
                    key: PillarKey::Vr,
                    title: "VR Integration",
                    summary: "Comfort-first interaction, precise tracking, and platform \
                        abstractions.",
                    details: vec![
                        "XR plugins, action mapping, haptics",
                        "Foveated rendering + late latching",
                        "Locomotion comfort modes, safety bounds",
                    ],
                    capabilities: vec!["OpenXR", "Haptics", "Foveated", "IK"],
                },
            ],
            team: Team {
                headline: "Agile team of innovators",
                subheading: "We design, prototype, and build immersive experiences through \
                    radical collaboration and disciplined experimentation.",
                members: vec![
                    TeamMember { name: "Avery Kim", role: "XR Product Lead" },
                    TeamMember { name: "Jordan Lee", role: "Realtime Graphics" },
                    TeamMember { name: "Riley Singh", role: "Haptics Engineer" },
                    TeamMember { name: "Samira Ortega", role: "Interaction Designer" },
                ],
                values: vec![
                    CultureValue {
                        title: "Collaboration First",
                        description: "We swarm problems, share context openly, and ship \
                            together. No silos, just a tight feedback loop.",
                    },
                    CultureValue {
                        title: "Layered Experimentation",
                        description: "Ideas move from quick sketches to playable prototypes \
                            in days. Learn fast, iterate faster.",
                    },
                    CultureValue {
                        title: "Evidence over Ego",
                        description: "We let data, playtests, and user delight guide us. The \
                            best ideas win, whoever they come from.",
                    },
                ],
                stages: vec![
                    ProcessStage {
                        key: "discover",
                        label: "Discover",
                        summary: "Align on outcomes, understand constraints, and map \
                            opportunity space.",
                        points: vec![
                            "Lightweight research & field notes",
                            "Team canvas + risks upfront",
                            "VR feasibility spikes",
                        ],
                    },
                    ProcessStage {
                        key: "design",
                        label: "Design",
                        summary: "Craft interactions and ergonomics that feel effortless \
                            inside the headset.",
                        points: vec![
                            "Interaction flows",
                            "Haptics & comfort tests",
                            "Prototype UI",
                        ],
                    },
                    ProcessStage {
                        key: "build",
                        label: "Build",
                        summary: "Tight loops between code, art, and hardware. Nightly \
                            builds; weekly playtests.",
                        points: vec![
                            "Track in Kanban",
                            "Real device profiling",
                            "Automated smoke tests",
                        ],
                    },
                    ProcessStage {
                        key: "iterate",
                        label: "Iterate",
                        summary: "Measure, learn, and refine. We celebrate what we learn, \
                            not just what we launch.",
                        points: vec![
                            "Playtest analytics",
                            "Qual + quant insights",
                            "Scope for delight",
                        ],
                    },
                ],
                default_stage: "discover",
            },
            contact_channels: vec![
                ContactChannel { label: "Email", value: "hello@inexia.vr" },
                ContactChannel { label: "Phone", value: "+1 (234) 567-890" },
                ContactChannel { label: "GitHub", value: "github.com" },
                ContactChannel { label: "LinkedIn", value: "linkedin.com" },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links() {
        let content = SiteContent::default();
        let ids: Vec<&str> = content.link_ids().collect();
        assert_eq!(ids, vec!["about", "projects", "technology", "team", "contact"]);
    }

    #[test]
    fn test_default_stage_exists() {
        let content = SiteContent::default();
        assert!(content
            .team
            .stages
            .iter()
            .any(|stage| stage.key == content.team.default_stage));
    }
}
