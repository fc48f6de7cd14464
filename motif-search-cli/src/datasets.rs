use clap::ValueEnum;

/// Built-in demo motifs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// 10 x 12, conserved GGGG core
    Motif1,
    /// 8 x 6
    Motif2,
    /// 5 x 10
    Motif3,
    /// 5 x 10, variant of motif3
    Motif4,
}

impl Dataset {
    pub fn rows(self) -> &'static [&'static str] {
        match self {
            Dataset::Motif1 => &[
                "TCGGGGGTTTTT",
                "CCGGTGACTTAC",
                "ACGGGGATTTTC",
                "TTGGGGACTTTT",
                "AAGGGGACTTCC",
                "TTGGGGACTTCC",
                "TCGGGGATTCAT",
                "TCGGGGATTCCT",
                "TAGGGGAACTAC",
                "TCGGGTATAACC",
            ],
            Dataset::Motif2 => &[
                "ATCCCT", "CACGAT", "AACCCT", "GAAGTT", "AACCCT", "TAACGT", "AAGGGT", "GAACTG",
            ],
            Dataset::Motif3 => &[
                "TTACCTTAAC",
                "GATGTCTGTC",
                "CCGGCGTTAG",
                "CACTAACGAG",
                "CGTCAGAGGT",
            ],
            Dataset::Motif4 => &[
                "TTACCTTAAC",
                "GATATCTGTC",
                "ACGGCGTTCG",
                "CCCTAAAGAG",
                "CGTCAGAGGT",
            ],
        }
    }
}
