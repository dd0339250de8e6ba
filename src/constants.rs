/// Fixed values for the icon resize run

pub mod icons {
    use image::imageops::FilterType;

    /// Icons processed on every run, in processing order
    pub const FILES: [&str; 10] = [
        "battery.png",
        "battery-full.png",
        "battery-low.png",
        "battery-medium.png",
        "battery-warning.png",
        "sun.png",
        "cloud.png",
        "cloud-rain.png",
        "cloud-snow.png",
        "cloud-lightning.png",
    ];

    /// Width and height of every resized icon, in pixels
    pub const TARGET_SIZE: u32 = 14;

    /// Resampling kernel used for the downscale
    pub const FILTER: FilterType = FilterType::Lanczos3;
}

pub mod paths {
    /// Default icon directory, relative to the working directory
    pub const RESOURCES_DIR: &str = "resources";
}
