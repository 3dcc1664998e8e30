use serde::{Deserialize, Serialize};

/// Consumption category offered by the entry form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Shower,
    Tap,
    Garden,
    Dishwasher,
    WashingMachine,
    CarWash,
    Bucket,
    Custom,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Shower,
        Category::Tap,
        Category::Garden,
        Category::Dishwasher,
        Category::WashingMachine,
        Category::CarWash,
        Category::Bucket,
        Category::Custom,
    ];

    /// Base activity key understood by the server
    pub fn key(&self) -> &'static str {
        match self {
            Self::Shower => "shower",
            Self::Tap => "tap",
            Self::Garden => "garden",
            Self::Dishwasher => "dishwasher",
            Self::WashingMachine => "washing_machine",
            Self::CarWash => "car_wash",
            Self::Bucket => "bucket",
            Self::Custom => "custom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Shower => "Shower",
            Self::Tap => "Tap",
            Self::Garden => "Garden watering",
            Self::Dishwasher => "Dishwasher",
            Self::WashingMachine => "Washing machine",
            Self::CarWash => "Car wash",
            Self::Bucket => "Bucket",
            Self::Custom => "Other (liters)",
        }
    }

    pub fn shape(&self) -> AmountShape {
        match self {
            Self::Shower | Self::Tap | Self::Garden => AmountShape::TimeBased,
            Self::Dishwasher | Self::WashingMachine => AmountShape::CycleBased,
            Self::CarWash => AmountShape::CountBased,
            Self::Bucket | Self::Custom => AmountShape::Liters,
        }
    }

    /// Efficiency modes with their approximate per-cycle volume.
    /// Empty for categories without a mode selector.
    pub fn mode_options(&self) -> Vec<ModeOption> {
        let volumes = match self {
            Self::Dishwasher => [10, 15, 20],
            Self::WashingMachine => [35, 50, 70],
            _ => return Vec::new(),
        };

        EfficiencyMode::ALL
            .into_iter()
            .zip(volumes)
            .map(|(mode, liters)| ModeOption {
                mode,
                label: format!("{} (~{}L)", mode.display_name(), liters),
            })
            .collect()
    }
}

/// How the amount field is interpreted for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountShape {
    TimeBased,
    CycleBased,
    CountBased,
    Liters,
}

impl AmountShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TimeBased => "Duration (minutes)",
            Self::CycleBased => "Cycles",
            Self::CountBased => "Wash count",
            Self::Liters => "Amount (liters)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::TimeBased => "e.g. 10",
            Self::CycleBased | Self::CountBased => "e.g. 1",
            Self::Liters => "e.g. 10.5",
        }
    }
}

/// Appliance program intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EfficiencyMode {
    Eco,
    #[default]
    Standard,
    Intensive,
}

impl EfficiencyMode {
    pub const ALL: [EfficiencyMode; 3] = [
        EfficiencyMode::Eco,
        EfficiencyMode::Standard,
        EfficiencyMode::Intensive,
    ];

    /// Suffix appended to the category key
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Eco => "_eco",
            Self::Standard => "_std",
            Self::Intensive => "_int",
        }
    }

    pub fn from_suffix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.suffix() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Eco => "Eco",
            Self::Standard => "Standard",
            Self::Intensive => "Intensive",
        }
    }
}

/// One entry of the mode selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOption {
    pub mode: EfficiencyMode,
    pub label: String,
}
