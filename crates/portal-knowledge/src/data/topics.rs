//! Topical fact groups per subject.

use crate::types::{Fact, FactGroup, Subject};

const fn item(text: &'static str) -> Fact {
    Fact { label: None, text }
}

const fn keyed(label: &'static str, text: &'static str) -> Fact {
    Fact {
        label: Some(label),
        text,
    }
}

pub static TOPICS: &[FactGroup] = &[
    FactGroup {
        subject: Subject::Animals,
        name: "adaptations.physical",
        facts: &[
            item("Camouflage: Chameleons change color to blend in with their surroundings 🦎"),
            item("Sharp claws: Eagles use talons to catch prey 🦅"),
            item("Thick fur: Arctic foxes stay warm in cold climates 🦊"),
            item("Long neck: Giraffes reach leaves high in trees 🦒"),
            item("Webbed feet: Ducks swim efficiently in water 🦆"),
        ],
    },
    FactGroup {
        subject: Subject::Animals,
        name: "adaptations.behavioral",
        facts: &[
            item("Migration: Birds fly south for winter to find food 🐦"),
            item("Hibernation: Bears sleep through winter to save energy 🐻"),
            item("Hunting in groups: Wolves work together to catch prey 🐺"),
            item("Playing dead: Opossums pretend to be dead to avoid predators 🐭"),
            item("Building nests: Birds create safe homes for their babies 🪺"),
        ],
    },
    FactGroup {
        subject: Subject::Animals,
        name: "habitats",
        facts: &[
            keyed("forest", "Forest animals like deer, squirrels, and owls live among trees and need shelter from weather 🌲"),
            keyed("ocean", "Ocean animals like fish, whales, and sharks live in saltwater and need to breathe underwater 🌊"),
            keyed("desert", "Desert animals like camels, snakes, and lizards survive with little water and extreme temperatures 🏜️"),
            keyed("arctic", "Arctic animals like polar bears, penguins, and seals have thick fur and blubber to stay warm ❄️"),
        ],
    },
    FactGroup {
        subject: Subject::Animals,
        name: "food_chains",
        facts: &[
            item("Forest: Acorns → Squirrels → Hawks → Decomposers"),
            item("Ocean: Algae → Small fish → Big fish → Sharks"),
            item("Grassland: Grass → Rabbits → Foxes → Decomposers"),
            item("Desert: Cactus → Insects → Lizards → Snakes"),
        ],
    },
    FactGroup {
        subject: Subject::Plants,
        name: "structures",
        facts: &[
            keyed("roots", "Roots anchor plants and absorb water and nutrients from soil. Some roots store food like carrots! 🥕"),
            keyed("stems", "Stems support plants and transport water and nutrients. Some stems store water like cacti! 🌵"),
            keyed("leaves", "Leaves make food through photosynthesis and help plants breathe. They come in many shapes! 🍃"),
            keyed("flowers", "Flowers attract pollinators and produce seeds for new plants. They're nature's way of making babies! 🌸"),
            keyed("fruits", "Fruits protect seeds and help them spread. Animals eat fruits and spread seeds in their droppings! 🍎"),
        ],
    },
    FactGroup {
        subject: Subject::Plants,
        name: "adaptations",
        facts: &[
            item("Cactus spines protect from animals and reduce water loss 🌵"),
            item("Water lily leaves float on water to get sunlight 🌸"),
            item("Venus flytrap catches insects for nutrients 🪴"),
            item("Pine needles stay green all year and resist cold 🌲"),
            item("Sunflower heads follow the sun across the sky 🌻"),
        ],
    },
    FactGroup {
        subject: Subject::Plants,
        name: "life_cycle",
        facts: &[
            item("Seeds → Sprout → Seedling → Adult Plant → Flowers → Fruits → Seeds (cycle repeats) 🌱"),
        ],
    },
    FactGroup {
        subject: Subject::EarthScience,
        name: "layers",
        facts: &[
            keyed("crust", "The thin outer layer where we live, made of rock and soil 🌍"),
            keyed("mantle", "The thick middle layer of hot, flowing rock 🔥"),
            keyed("outer_core", "The liquid layer of molten metal 🌋"),
            keyed("inner_core", "The solid center made of iron and nickel ⚡"),
        ],
    },
    FactGroup {
        subject: Subject::EarthScience,
        name: "rock_cycle",
        facts: &[
            keyed("igneous", "Formed from cooled lava or magma, like granite and basalt 🌋"),
            keyed("sedimentary", "Formed from layers of sediment, often contains fossils 🏔️"),
            keyed("metamorphic", "Changed by heat and pressure, like marble and slate 🔥"),
        ],
    },
    FactGroup {
        subject: Subject::EarthScience,
        name: "weathering",
        facts: &[
            keyed("physical", "Wind, water, ice, and temperature changes break rocks apart 🌪️"),
            keyed("chemical", "Acid rain and other chemicals dissolve rocks 🧪"),
            keyed("biological", "Plant roots and animal burrowing break rocks apart 🌱"),
        ],
    },
    FactGroup {
        subject: Subject::EarthScience,
        name: "natural_disasters",
        facts: &[
            keyed("earthquakes", "Caused by tectonic plates moving, can cause tsunamis 🌊"),
            keyed("volcanoes", "Release lava, ash, and gases, create new land 🌋"),
            keyed("hurricanes", "Powerful storms with strong winds and heavy rain 🌪️"),
            keyed("tornadoes", "Spinning columns of air that can destroy buildings 🌪️"),
        ],
    },
    FactGroup {
        subject: Subject::PhysicalScience,
        name: "energy.types",
        facts: &[
            item("Light energy: From the sun, powers solar panels ☀️"),
            item("Heat energy: Makes things warm, like a campfire 🔥"),
            item("Motion energy: Moving objects have this energy 🏃"),
            item("Sound energy: Vibrations we can hear 🔊"),
            item("Electrical energy: Powers our devices ⚡"),
        ],
    },
    FactGroup {
        subject: Subject::PhysicalScience,
        name: "energy.transfer",
        facts: &[
            item("Energy can change from one type to another, like sunlight becoming electricity in solar panels! 🔄"),
        ],
    },
    FactGroup {
        subject: Subject::PhysicalScience,
        name: "forces",
        facts: &[
            keyed("gravity", "Pulls objects toward Earth, keeps us on the ground 🌍"),
            keyed("friction", "Slows down moving objects, helps us walk without slipping 👟"),
            keyed("magnetism", "Attracts or repels metal objects, used in compasses 🧲"),
            keyed("buoyancy", "Pushes objects up in water, helps boats float 🚢"),
        ],
    },
    FactGroup {
        subject: Subject::PhysicalScience,
        name: "simple_machines",
        facts: &[
            keyed("lever", "Makes lifting easier, like a see-saw or crowbar ⚖️"),
            keyed("pulley", "Lifts heavy objects, like flagpoles and cranes 🏗️"),
            keyed("wheel", "Reduces friction, makes transportation easier 🚗"),
            keyed("inclined_plane", "Makes moving objects easier, like ramps and stairs 🪜"),
        ],
    },
    FactGroup {
        subject: Subject::Engineering,
        name: "design_process",
        facts: &[
            item("1. Ask: What problem needs solving? 🤔"),
            item("2. Imagine: Brainstorm possible solutions 💡"),
            item("3. Plan: Choose the best solution and make a design 📋"),
            item("4. Create: Build a prototype 🛠️"),
            item("5. Test: Try it out and see what happens 🧪"),
            item("6. Improve: Make it better based on what you learned 🔧"),
        ],
    },
    FactGroup {
        subject: Subject::Engineering,
        name: "real_world_applications",
        facts: &[
            item("Engineers design bridges to safely cross rivers 🌉"),
            item("They create water filters to clean dirty water 💧"),
            item("They build wind turbines to generate clean energy 💨"),
            item("They design prosthetics to help people with disabilities 🦿"),
            item("They create apps to solve everyday problems 📱"),
        ],
    },
];
