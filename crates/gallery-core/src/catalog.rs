//! Static painting metadata.

/// Folder (relative to the page) that painting images are served from.
pub const IMAGE_BASE_PATH: &str = "images/";

/// One catalog entry. `year` is free-form text; not every entry has a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintingRecord {
    pub id: u32,
    pub filename: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

impl PaintingRecord {
    pub fn image_url(&self) -> String {
        format!("{}{}", IMAGE_BASE_PATH, self.filename)
    }
}

pub static PAINTINGS: &[PaintingRecord] = &[
    PaintingRecord {
        id: 1,
        filename: "Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg",
        title: "The Starry Night",
        year: "1889",
        description: "One of Van Gogh's most famous works, painted during his stay at the asylum of Saint-Paul-de-Mausole. The painting depicts a night scene with a swirling sky and a quiet village below.",
    },
    PaintingRecord {
        id: 2,
        filename: "2.webp",
        title: "Self-Portrait",
        year: "1889",
        description: "One of many self-portraits by Van Gogh, showing the artist with a serious expression against a swirling blue background that echoes his famous sky techniques.",
    },
    PaintingRecord {
        id: 3,
        filename: "3.webp",
        title: "Self-Portrait with Grey Felt Hat",
        year: "1887",
        description: "A self-portrait of Van Gogh wearing a grey felt hat, showcasing his distinctive brushwork and use of color to convey emotion.",
    },
    PaintingRecord {
        id: 4,
        filename: "4.webp",
        title: "Snoopy on Starry Night (Parody)",
        year: "N/A",
        description: "A modern artistic parody combining Van Gogh's Starry Night style with the character Snoopy from the Peanuts comic strip.",
    },
    PaintingRecord {
        id: 5,
        filename: "5.jpeg",
        title: "Starry Night Over the Rhône",
        year: "1888",
        description: "Painted before the more famous Starry Night, this work shows the night sky and reflections in the Rhône River in Arles, France.",
    },
    PaintingRecord {
        id: 6,
        filename: "6.jpeg",
        title: "Starry Night Over the Rhône (Variant)",
        year: "1888",
        description: "Another view or reproduction of Van Gogh's Starry Night Over the Rhône, showing the starlit sky above the river with city lights reflected in the water.",
    },
    PaintingRecord {
        id: 7,
        filename: "7.jpeg",
        title: "Starry Night Detail",
        year: "1889",
        description: "A detail or variant of The Starry Night, focusing on the swirling patterns in the night sky that made this painting so revolutionary.",
    },
];
