use crate::domain::ModEntry;
use std::path::{Path, PathBuf};

/// The mod set this tool maintains: expected local filename to Modrinth
/// project id. Filenames are assumed unique within the table.
const MOD_TABLE: &[(&str, &str)] = &[
    ("2mal3s-recipes-v1.7.1.jar", "hIlFLwrl"),
    ("armorstands-1.0.2-1.19.jar", "FlC9CXUY"),
    ("betterladdersmod-0.0.1-1.19.x-No-3D-Model.jar", "CvgtCmGj"),
    ("blasting-plus-1.1.jar", "bSKJNoQF"),
    ("campfire_xp-1.1.0.jar", "duYxsTy5"),
    ("crafting+-1.20.1.10.jar", "sjUk6lfU"),
    ("DamageVignette-2.0.1-fabric+mc1.19.x.jar", "TsEhjL6r"),
    ("enhanced-searchability-mc1.19-3.0.1+build.9.jar", "Scg0CNUt"),
    ("EnhancedBookWriting-1.1.1+mc1.19.2.jar", "6XFa5bbd"),
    ("experienceprogress-1.0.0+1.19.jar", "WLzTG5bH"),
    ("explosive-enhancement-1.2.2-1.19.2.jar", "OSQ8mw2r"),
    ("extended_dropper-1.0.0.jar", "ajGW8XXy"),
    ("flatworld-1.0.5+1.19.2.jar", "xZIo4pHq"),
    ("LogsBeGone-1.1.0.jar", "SpQWQ4KX"),
    ("log_minecraft_startup-1.0.0.jar", "604L8uva"),
    ("LowDurabilitySwitcher-1.0.1+1.19.2.jar", "aq4dI2bx"),
    ("mob-captains-v2.1.2.jar", "7tKn1fLd"),
    ("more-amethyst-recipes-1.0.jar", "DcLnY1WI"),
    ("morefuel-backport-1.19.2.jar", "lsHqikzP"),
    ("moremusic-0.1.3+1.19.jar", "dGBEUH8l"),
    ("noxesium-0.1.4.jar", "Kw7Sm3Xf"),
    ("ores-1.0.0.jar", "Fv4jDxvH"),
    ("peaceful_fixed-1.0.jar", "xlqb2iiJ"),
    ("recycle-leather-1.48.0.jar", "A7OneGH8"),
    ("saferespawn-1.0.2.jar", "izAOI0WZ"),
    ("shield-disruptor-1.8.1.jar", "ded5u7eL"),
    ("stonecobbling-1.jar", "6R6Tq5dp"),
    ("threatengl-fabric-1.3.3-release.1.jar", "RSFrpoou"),
    ("trashslot-fabric-1.19.2-12.1.0.jar", "vRYk0bv7"),
    ("village-hero-plus-5.1.jar", "BZnc0tTs"),
    ("wooden_shield-0.0.3-1.19.jar", "93Ohla4d"),
    ("world-day-1.0.jar", "s9XmaS3m"),
    ("[1.18+]-elytrabombing-1.1.1.jar", "Uo5uFsvU"),
];

pub fn mod_entries() -> Vec<ModEntry> {
    MOD_TABLE
        .iter()
        .map(|(filename, project_id)| ModEntry::new(filename, project_id))
        .collect()
}

/// Mods land in a `mods` directory next to the directory holding the
/// executable, so a binary under `<pack>/bin/` fills `<pack>/mods/`.
pub fn download_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let base = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| anyhow::anyhow!("Could not resolve the executable's parent directory"))?;
    Ok(base.join("mods"))
}
