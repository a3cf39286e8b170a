use crate::types::ScenarioEntry;

pub static SCENARIOS: &[ScenarioEntry] = &[
    ScenarioEntry {
        problem: "A farmer's crops are dying because of drought. How can we help?",
        solution: "Design a water collection system using rain barrels and drip irrigation to conserve water! 💧",
        real_world: "This is how farmers in dry areas grow food sustainably! 🌾",
    },
    ScenarioEntry {
        problem: "Animals are losing their homes because of deforestation. What can we do?",
        solution: "Create wildlife corridors - strips of protected land connecting forest areas so animals can move safely! 🦌",
        real_world: "Wildlife corridors are being built around the world to protect endangered species! 🌍",
    },
    ScenarioEntry {
        problem: "A town's electricity goes out during a storm. How can we help?",
        solution: "Design a backup power system using solar panels and batteries to keep essential services running! ☀️",
        real_world: "Many hospitals and emergency services use backup power systems just like this! 🏥",
    },
    ScenarioEntry {
        problem: "Plastic pollution is harming ocean animals. What's the solution?",
        solution: "Create a community recycling program and design biodegradable alternatives to plastic! ♻️",
        real_world: "Scientists are developing biodegradable plastics made from plants! 🌱",
    },
];
