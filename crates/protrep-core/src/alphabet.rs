/// The 20 standard amino acids in one-letter code, in encoding order.
pub const AMINO_ACIDS: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

#[rustfmt::skip]
pub fn aa3_to_aa1(aa: &str) -> char {
    match aa {
        "ALA" => 'A', "CYS" => 'C', "ASP" => 'D',
        "GLU" => 'E', "PHE" => 'F', "GLY" => 'G',
        "HIS" => 'H', "ILE" => 'I', "LYS" => 'K',
        "LEU" => 'L', "MET" => 'M', "ASN" => 'N',
        "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R',
        "SER" => 'S', "THR" => 'T', "VAL" => 'V',
        "TRP" => 'W', "TYR" => 'Y', _     => 'X',
    }
}

/// Column index of a residue in [`AMINO_ACIDS`]. Case-insensitive.
#[rustfmt::skip]
pub fn aa1_to_index(aa: char) -> Option<usize> {
    match aa.to_ascii_uppercase() {
        'A' => Some(0),  'C' => Some(1),  'D' => Some(2),
        'E' => Some(3),  'F' => Some(4),  'G' => Some(5),
        'H' => Some(6),  'I' => Some(7),  'K' => Some(8),
        'L' => Some(9),  'M' => Some(10), 'N' => Some(11),
        'P' => Some(12), 'Q' => Some(13), 'R' => Some(14),
        'S' => Some(15), 'T' => Some(16), 'V' => Some(17),
        'W' => Some(18), 'Y' => Some(19), _   => None,
    }
}

pub fn index_to_aa1(index: usize) -> char {
    AMINO_ACIDS.get(index).copied().unwrap_or('X')
}
