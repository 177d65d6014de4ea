/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let titles: [(&str, &str, &str, i32); 18] = [
        ("Naruto", "Action, Shounen", "TV", 2002),
        ("Bleach", "Action, Supernatural", "TV", 2004),
        ("One Piece", "Action, Adventure, Shounen", "TV", 1999),
        ("Mushishi", "Slice of Life, Supernatural", "TV", 2005),
        ("Your Name", "Romance, Drama", "Movie", 2016),
        ("Spirited Away", "Adventure, Fantasy", "Movie", 2001),
        ("Cowboy Bebop", "Action, Sci-Fi", "TV", 1998),
        ("Monster", "Mystery, Thriller", "TV", 2004),
        ("K-On!", "Slice of Life, Comedy", "TV", 2009),
        ("Redline", "Action-Adventure", "Movie", 2009),
        ("Steins;Gate", "Sci-Fi, Thriller", "TV", 2011),
        ("Made in Abyss", "Adventure, Fantasy", "TV", 2017),
        ("Violet Evergarden", "Drama, Fantasy", "TV", 2018),
        ("A Silent Voice", "Drama, Romance", "Movie", 2016),
        ("Hellsing Ultimate", "Action, Horror", "OVA", 2006),
        ("FLCL", "Comedy, Sci-Fi", "OVA", 2000),
        ("Barakamon", "Slice of Life, Comedy", "TV", 2014),
        ("Perfect Blue", "Mystery, Thriller", "Movie", 1997),
    ];

    let statuses = ["Completed", "Watching", "Dropped", "Plan to Watch"];

    let output_path = "sample_catalog.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Title",
            "Genre",
            "Watch Status",
            "Type",
            "Release Year",
            "Rating",
            "Image",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (title, genres, kind, year) in titles {
        let status = *rng.choose(&statuses);

        // Roughly one in six titles has no rating yet; unrated titles must
        // drop out of the average-rating chart.
        let rating = if rng.next_f64() < 1.0 / 6.0 {
            String::new()
        } else {
            format!("{:.1}", 5.0 + rng.next_f64() * 5.0)
        };

        // Cover art exists for most titles only.
        let image = if rng.next_f64() < 0.8 {
            format!(
                "https://cdn.example.org/covers/{}.jpg",
                title.to_lowercase().replace([' ', ';', '!'], "-")
            )
        } else {
            String::new()
        };

        let year = year.to_string();
        writer
            .write_record([
                title,
                genres,
                status,
                kind,
                year.as_str(),
                rating.as_str(),
                image.as_str(),
            ])
            .expect("Failed to write record");
        rows += 1;
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} titles to {output_path}");
}
