//! Vocabulary entries, grouped by subject in insertion order.

use crate::types::KnowledgeEntry;

pub static VOCABULARY: &[KnowledgeEntry] = &[
    // Life science
    KnowledgeEntry {
        key: "adaptation",
        definition: "A trait that helps an organism survive in its environment",
        examples: &[
            "Giraffe's long neck for reaching leaves",
            "Polar bear's white fur for camouflage",
            "Cactus spines for protection",
        ],
        real_world: "Engineers study animal adaptations to design better products, like Velcro inspired by burr plants! 🔬",
    },
    KnowledgeEntry {
        key: "ecosystem",
        definition: "A community of living and non-living things that interact with each other",
        examples: &[
            "Forest ecosystem",
            "Ocean ecosystem",
            "Desert ecosystem",
        ],
        real_world: "Scientists study ecosystems to help protect endangered species and restore damaged environments 🌍",
    },
    KnowledgeEntry {
        key: "photosynthesis",
        definition: "The process plants use to make food using sunlight, water, and carbon dioxide",
        examples: &[
            "Leaves turning sunlight into energy",
            "Plants producing oxygen",
            "Green color from chlorophyll",
        ],
        real_world: "Scientists are studying photosynthesis to create artificial leaves that could help solve energy problems! 🌱⚡",
    },
    KnowledgeEntry {
        key: "food chain",
        definition: "A sequence showing how energy flows from one organism to another",
        examples: &[
            "Grass → Rabbit → Hawk",
            "Algae → Fish → Shark",
            "Plant → Insect → Bird",
        ],
        real_world: "Understanding food chains helps farmers protect crops and scientists maintain healthy ecosystems 🐰🦅",
    },
    KnowledgeEntry {
        key: "producer",
        definition: "An organism that makes its own food, usually plants",
        examples: &[
            "Grass",
            "Trees",
            "Algae",
            "Seaweed",
        ],
        real_world: "Producers are essential for all life on Earth - they're the foundation of every food chain! 🌿",
    },
    KnowledgeEntry {
        key: "consumer",
        definition: "An organism that eats other organisms for food",
        examples: &[
            "Herbivores (plant eaters)",
            "Carnivores (meat eaters)",
            "Omnivores (eat both)",
        ],
        real_world: "Humans are consumers too! We depend on producers and other consumers for our food 🍎",
    },
    KnowledgeEntry {
        key: "decomposer",
        definition: "An organism that breaks down dead plants and animals",
        examples: &[
            "Bacteria",
            "Fungi",
            "Earthworms",
        ],
        real_world: "Decomposers are nature's recyclers - they turn waste into nutrients for new plants! ♻️",
    },
    KnowledgeEntry {
        key: "habitat",
        definition: "The natural home or environment of an animal or plant",
        examples: &[
            "Forest habitat",
            "Ocean habitat",
            "Desert habitat",
        ],
        real_world: "Conservationists work to protect habitats so animals and plants can survive and thrive 🏞️",
    },
    KnowledgeEntry {
        key: "migration",
        definition: "The seasonal movement of animals from one place to another",
        examples: &[
            "Birds flying south for winter",
            "Monarch butterflies traveling",
            "Caribou herds moving",
        ],
        real_world: "Scientists track animal migration to understand climate change and protect migration routes 🦅",
    },
    KnowledgeEntry {
        key: "hibernation",
        definition: "A deep sleep that some animals enter during winter",
        examples: &[
            "Bears sleeping in caves",
            "Groundhogs in burrows",
            "Bats in caves",
        ],
        real_world: "Understanding hibernation helps scientists develop new medical treatments for humans! 🐻",
    },
    // Earth science
    KnowledgeEntry {
        key: "weathering",
        definition: "The breaking down of rocks by wind, water, ice, or living things",
        examples: &[
            "Water freezing in cracks",
            "Tree roots breaking rocks",
            "Wind blowing sand",
        ],
        real_world: "Weathering creates soil that farmers need to grow our food! 🌾",
    },
    KnowledgeEntry {
        key: "erosion",
        definition: "The movement of weathered rock and soil by wind, water, or ice",
        examples: &[
            "Rivers carrying sediment",
            "Wind moving sand dunes",
            "Glaciers carving valleys",
        ],
        real_world: "Understanding erosion helps engineers build stronger bridges and protect coastlines! 🌊",
    },
    KnowledgeEntry {
        key: "rock cycle",
        definition: "The process of rocks changing from one type to another over time",
        examples: &[
            "Igneous → Sedimentary → Metamorphic",
            "Heat and pressure changing rocks",
            "Melting and cooling",
        ],
        real_world: "The rock cycle creates valuable resources like marble for buildings and coal for energy! 🏗️",
    },
    KnowledgeEntry {
        key: "igneous rock",
        definition: "Rock formed from cooled lava or magma",
        examples: &[
            "Granite",
            "Basalt",
            "Obsidian",
        ],
        real_world: "Igneous rocks like granite are used to build countertops and monuments! 🏛️",
    },
    KnowledgeEntry {
        key: "sedimentary rock",
        definition: "Rock formed from layers of sediment pressed together",
        examples: &[
            "Sandstone",
            "Limestone",
            "Shale",
        ],
        real_world: "Sedimentary rocks often contain fossils that teach us about Earth's history! 🦕",
    },
    KnowledgeEntry {
        key: "metamorphic rock",
        definition: "Rock changed by heat and pressure",
        examples: &[
            "Marble",
            "Slate",
            "Gneiss",
        ],
        real_world: "Marble is used in beautiful buildings like the Taj Mahal! 🏛️",
    },
    KnowledgeEntry {
        key: "mineral",
        definition: "A naturally occurring solid with a specific chemical composition",
        examples: &[
            "Quartz",
            "Diamond",
            "Gold",
            "Salt",
        ],
        real_world: "Minerals are used in everything from jewelry to computer chips! 💎💻",
    },
    KnowledgeEntry {
        key: "fossil",
        definition: "The preserved remains or traces of ancient living things",
        examples: &[
            "Dinosaur bones",
            "Leaf imprints",
            "Shells in rock",
        ],
        real_world: "Fossils help scientists understand how life on Earth has changed over millions of years! 🦴",
    },
    KnowledgeEntry {
        key: "earthquake",
        definition: "A sudden shaking of the ground caused by movement of Earth's crust",
        examples: &[
            "Tectonic plates moving",
            "Fault lines shifting",
            "Ground shaking",
        ],
        real_world: "Scientists study earthquakes to help predict them and build safer buildings! 🏢",
    },
    KnowledgeEntry {
        key: "volcano",
        definition: "An opening in Earth's crust where lava, ash, and gases escape",
        examples: &[
            "Mount St. Helens",
            "Hawaiian volcanoes",
            "Underwater volcanoes",
        ],
        real_world: "Volcanic soil is very fertile and great for growing crops! 🌋🌱",
    },
    // Physical science
    KnowledgeEntry {
        key: "energy",
        definition: "The ability to do work or cause change",
        examples: &[
            "Light energy",
            "Heat energy",
            "Motion energy",
            "Sound energy",
        ],
        real_world: "Energy powers everything from cars to computers to our own bodies! ⚡",
    },
    KnowledgeEntry {
        key: "motion",
        definition: "The change in position of an object over time",
        examples: &[
            "A ball rolling",
            "A car moving",
            "A bird flying",
        ],
        real_world: "Understanding motion helps engineers design safer cars and faster airplanes! 🚗✈️",
    },
    KnowledgeEntry {
        key: "force",
        definition: "A push or pull that can change an object's motion",
        examples: &[
            "Pushing a door",
            "Pulling a wagon",
            "Gravity pulling down",
        ],
        real_world: "Forces are everywhere - even when you're sitting still, gravity is pulling you down! 🪑",
    },
    KnowledgeEntry {
        key: "gravity",
        definition: "The force that pulls objects toward each other",
        examples: &[
            "Apples falling from trees",
            "Moon orbiting Earth",
            "Planets orbiting Sun",
        ],
        real_world: "Gravity keeps us on Earth and makes the Moon go around us! 🌙",
    },
    KnowledgeEntry {
        key: "friction",
        definition: "A force that slows down objects when they rub against each other",
        examples: &[
            "Shoes on pavement",
            "Brakes on wheels",
            "Air resistance",
        ],
        real_world: "Friction helps us walk without slipping, but engineers try to reduce it in cars for better gas mileage! 👟🚗",
    },
    KnowledgeEntry {
        key: "simple machine",
        definition: "A basic tool that makes work easier",
        examples: &[
            "Lever",
            "Pulley",
            "Wheel and axle",
            "Inclined plane",
        ],
        real_world: "Simple machines are everywhere - from scissors to car jacks to playground equipment! 🔧",
    },
    KnowledgeEntry {
        key: "lever",
        definition: "A simple machine with a rigid bar that pivots on a fulcrum",
        examples: &[
            "See-saw",
            "Crowbar",
            "Scissors",
            "Baseball bat",
        ],
        real_world: "Levers help us lift heavy things with less effort - like using a crowbar to move rocks! 🪨",
    },
    KnowledgeEntry {
        key: "pulley",
        definition: "A simple machine with a wheel and rope used to lift heavy objects",
        examples: &[
            "Flagpole",
            "Crane",
            "Window blinds",
            "Well bucket",
        ],
        real_world: "Pulleys are used in construction cranes to lift heavy building materials! 🏗️",
    },
    KnowledgeEntry {
        key: "wheel and axle",
        definition: "A simple machine with a wheel attached to a rod",
        examples: &[
            "Car wheel",
            "Doorknob",
            "Steering wheel",
            "Bicycle wheel",
        ],
        real_world: "Wheels and axles make transportation possible - from cars to bicycles to shopping carts! 🚲",
    },
    KnowledgeEntry {
        key: "inclined plane",
        definition: "A simple machine that is a flat surface at an angle",
        examples: &[
            "Ramp",
            "Stairs",
            "Slide",
            "Road up a hill",
        ],
        real_world: "Inclined planes help us move heavy objects - like ramps for wheelchairs! ♿",
    },
];
