//! core::skeletal::catalog
//!
//! The ordered enumeration of the 206 bones of the adult skeleton.
//!
//! # Order
//!
//! Entries appear region by region in [`crate::core::skeletal::schema::Region`]
//! order. Paired bones are interleaved: the left member of a pair is
//! immediately followed by its right member. Hand and foot enumerations are
//! order-sensitive and reproduce the exact anatomical counts:
//!
//! | Group       | Per side | Total |
//! |-------------|----------|-------|
//! | Carpals     | 8        | 16    |
//! | Metacarpals | 5        | 10    |
//! | Hand phalanges | 14    | 28    |
//! | Tarsals     | 7        | 14    |
//! | Metatarsals | 5        | 10    |
//! | Foot phalanges | 14    | 28    |
//!
//! The thumb and great toe have no middle phalanx.

use super::placeholder::BoneTemplate;
use super::schema::{BoneType, Laterality, Region};
use crate::core::types::{BoneId, FmaId, TypeError};

/// Expected size of the catalog.
pub const ADULT_BONE_COUNT: usize = 206;

const CARPALS: [&str; 8] = [
    "scaphoid",
    "lunate",
    "triquetrum",
    "pisiform",
    "trapezium",
    "trapezoid",
    "capitate",
    "hamate",
];

const TARSALS: [&str; 7] = [
    "calcaneus",
    "talus",
    "navicular",
    "cuboid",
    "medial-cuneiform",
    "intermediate-cuneiform",
    "lateral-cuneiform",
];

const FINGERS: [&str; 5] = ["thumb", "index", "middle", "ring", "little"];

const TOES: [&str; 5] = [
    "great-toe",
    "second-toe",
    "third-toe",
    "fourth-toe",
    "little-toe",
];

const PHALANX_TYPES: [&str; 3] = ["proximal", "middle", "distal"];

/// Phalanx types of a digit; the first digit has no middle phalanx.
fn phalanx_types(digit_index: usize) -> &'static [&'static str] {
    if digit_index == 0 {
        &["proximal", "distal"]
    } else {
        &PHALANX_TYPES
    }
}

/// Uppercase the first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "medial-cuneiform" -> "Medial Cuneiform"
fn title_case(stem: &str) -> String {
    stem.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Accumulates templates in declaration order.
#[derive(Default)]
struct CatalogBuilder {
    entries: Vec<BoneTemplate>,
}

impl CatalogBuilder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        id: &str,
        name: &str,
        latin_name: &str,
        kind: BoneType,
        region: Region,
        laterality: Laterality,
        fma_id: &str,
    ) -> Result<(), TypeError> {
        self.entries.push(BoneTemplate {
            id: BoneId::new(id)?,
            name: name.to_string(),
            latin_name: latin_name.to_string(),
            kind,
            division: region.division(),
            region,
            laterality,
            fma_id: FmaId::new(fma_id)?,
        });
        Ok(())
    }

    fn midline(
        &mut self,
        id: &str,
        name: &str,
        latin_name: &str,
        kind: BoneType,
        region: Region,
        fma_id: &str,
    ) -> Result<(), TypeError> {
        self.push(id, name, latin_name, kind, region, Laterality::Midline, fma_id)
    }

    /// Push `{stem}-left` / `{stem}-right` named "Left {name}" / "Right {name}".
    #[allow(clippy::too_many_arguments)]
    fn pair(
        &mut self,
        stem: &str,
        name: &str,
        latin_name: &str,
        kind: BoneType,
        region: Region,
        fma_left: &str,
        fma_right: &str,
    ) -> Result<(), TypeError> {
        self.push(
            &format!("{stem}-left"),
            &format!("Left {name}"),
            latin_name,
            kind,
            region,
            Laterality::Left,
            fma_left,
        )?;
        self.push(
            &format!("{stem}-right"),
            &format!("Right {name}"),
            latin_name,
            kind,
            region,
            Laterality::Right,
            fma_right,
        )
    }

    fn cranial(&mut self) -> Result<(), TypeError> {
        use BoneType::*;
        let r = Region::SkullCranial;
        self.midline("frontal", "Frontal Bone", "Os frontale", Flat, r, "FMA:52734")?;
        self.pair("parietal", "Parietal Bone", "Os parietale", Flat, r, "FMA:52785", "FMA:52786")?;
        self.pair(
            "temporal",
            "Temporal Bone",
            "Os temporale",
            Irregular,
            r,
            "FMA:52738",
            "FMA:52739",
        )?;
        self.midline("occipital", "Occipital Bone", "Os occipitale", Flat, r, "FMA:52735")?;
        self.midline("sphenoid", "Sphenoid Bone", "Os sphenoidale", Irregular, r, "FMA:52736")?;
        self.midline("ethmoid", "Ethmoid Bone", "Os ethmoidale", Irregular, r, "FMA:52740")?;
        // Auditory ossicles, housed in the temporal bone.
        self.pair("malleus", "Malleus", "Malleus", Irregular, r, "FMA:52776", "FMA:52777")?;
        self.pair("incus", "Incus", "Incus", Irregular, r, "FMA:52779", "FMA:52780")?;
        self.pair("stapes", "Stapes", "Stapes", Irregular, r, "FMA:52782", "FMA:52783")
    }

    fn facial(&mut self) -> Result<(), TypeError> {
        use BoneType::*;
        let r = Region::SkullFacial;
        self.pair("nasal", "Nasal Bone", "Os nasale", Flat, r, "FMA:52746", "FMA:52747")?;
        self.pair("maxilla", "Maxilla", "Maxilla", Irregular, r, "FMA:52749", "FMA:52750")?;
        self.pair(
            "zygomatic",
            "Zygomatic Bone",
            "Os zygomaticum",
            Irregular,
            r,
            "FMA:52752",
            "FMA:52753",
        )?;
        self.pair("lacrimal", "Lacrimal Bone", "Os lacrimale", Flat, r, "FMA:52756", "FMA:52757")?;
        self.pair(
            "palatine",
            "Palatine Bone",
            "Os palatinum",
            Irregular,
            r,
            "FMA:52760",
            "FMA:52761",
        )?;
        self.pair(
            "inferior-nasal-concha",
            "Inferior Nasal Concha",
            "Concha nasalis inferior",
            Irregular,
            r,
            "FMA:52764",
            "FMA:52765",
        )?;
        self.midline("vomer", "Vomer", "Vomer", Flat, r, "FMA:52768")?;
        self.midline("mandible", "Mandible", "Mandibula", Irregular, r, "FMA:52748")?;
        self.midline("hyoid", "Hyoid Bone", "Os hyoideum", Irregular, r, "FMA:52774")
    }

    fn vertebral(&mut self) -> Result<(), TypeError> {
        use BoneType::Irregular;
        for i in 1..=7 {
            let name = match i {
                1 => "Atlas (C1)".to_string(),
                2 => "Axis (C2)".to_string(),
                _ => format!("Cervical Vertebra C{i}"),
            };
            self.midline(
                &format!("cervical-{i}"),
                &name,
                &format!("Vertebra cervicalis {i}"),
                Irregular,
                Region::VertebralCervical,
                &format!("FMA:1277{i}"),
            )?;
        }
        for i in 1..=12 {
            self.midline(
                &format!("thoracic-{i}"),
                &format!("Thoracic Vertebra T{i}"),
                &format!("Vertebra thoracica {i}"),
                Irregular,
                Region::VertebralThoracic,
                &format!("FMA:1278{i}"),
            )?;
        }
        for i in 1..=5 {
            self.midline(
                &format!("lumbar-{i}"),
                &format!("Lumbar Vertebra L{i}"),
                &format!("Vertebra lumbalis {i}"),
                Irregular,
                Region::VertebralLumbar,
                &format!("FMA:1279{i}"),
            )?;
        }
        let r = Region::VertebralSacral;
        self.midline("sacrum", "Sacrum", "Os sacrum", Irregular, r, "FMA:16202")?;
        self.midline("coccyx", "Coccyx", "Os coccygis", Irregular, r, "FMA:20229")
    }

    fn thoracic_cage(&mut self) -> Result<(), TypeError> {
        let r = Region::ThoracicCage;
        self.midline("sternum", "Sternum", "Sternum", BoneType::Flat, r, "FMA:7485")?;
        for i in 1..=12 {
            let latin = format!("Costa {i}");
            self.push(
                &format!("rib-left-{i}"),
                &format!("Left Rib {i}"),
                &latin,
                BoneType::Flat,
                r,
                Laterality::Left,
                &format!("FMA:748{}", i + 5),
            )?;
            self.push(
                &format!("rib-right-{i}"),
                &format!("Right Rib {i}"),
                &latin,
                BoneType::Flat,
                r,
                Laterality::Right,
                &format!("FMA:749{}", i + 5),
            )?;
        }
        Ok(())
    }

    fn upper_limb(&mut self) -> Result<(), TypeError> {
        use BoneType::*;
        let r = Region::PectoralGirdle;
        self.pair("clavicle", "Clavicle", "Clavicula", Long, r, "FMA:13321", "FMA:13322")?;
        self.pair("scapula", "Scapula", "Scapula", Flat, r, "FMA:13394", "FMA:13395")?;

        let r = Region::UpperLimbArm;
        self.pair("humerus", "Humerus", "Humerus", Long, r, "FMA:13303", "FMA:13304")?;

        let r = Region::UpperLimbForearm;
        self.pair("radius", "Radius", "Radius", Long, r, "FMA:23463", "FMA:23464")?;
        self.pair("ulna", "Ulna", "Ulna", Long, r, "FMA:23466", "FMA:23467")?;

        let r = Region::UpperLimbHand;
        for (i, carpal) in CARPALS.iter().enumerate() {
            self.pair(
                carpal,
                &capitalize(carpal),
                &format!("Os {carpal}"),
                Short,
                r,
                &format!("FMA:2350{i}"),
                &format!("FMA:2351{i}"),
            )?;
        }
        for i in 1..=5 {
            self.pair(
                &format!("metacarpal-{i}"),
                &format!("Metacarpal {i}"),
                &format!("Os metacarpale {i}"),
                Long,
                r,
                &format!("FMA:2360{i}"),
                &format!("FMA:2361{i}"),
            )?;
        }
        for (fi, finger) in FINGERS.iter().enumerate() {
            for (pi, phalanx) in phalanx_types(fi).iter().enumerate() {
                self.pair(
                    &format!("phalanx-{phalanx}-{finger}"),
                    &format!("{} Phalanx ({finger})", capitalize(phalanx)),
                    &format!("Phalanx {phalanx} digiti {}", fi + 1),
                    Long,
                    r,
                    &format!("FMA:237{fi}{pi}"),
                    &format!("FMA:238{fi}{pi}"),
                )?;
            }
        }
        Ok(())
    }

    fn lower_limb(&mut self) -> Result<(), TypeError> {
        use BoneType::*;
        let r = Region::PelvicGirdle;
        self.pair("hip-bone", "Hip Bone", "Os coxae", Irregular, r, "FMA:16585", "FMA:16586")?;

        let r = Region::LowerLimbThigh;
        self.pair("femur", "Femur", "Femur", Long, r, "FMA:24474", "FMA:24475")?;
        self.pair("patella", "Patella", "Patella", Sesamoid, r, "FMA:24485", "FMA:24486")?;

        let r = Region::LowerLimbLeg;
        self.pair("tibia", "Tibia", "Tibia", Long, r, "FMA:24476", "FMA:24477")?;
        self.pair("fibula", "Fibula", "Fibula", Long, r, "FMA:24479", "FMA:24480")?;

        let r = Region::LowerLimbFoot;
        for (i, tarsal) in TARSALS.iter().enumerate() {
            self.pair(
                tarsal,
                &title_case(tarsal),
                &format!("Os {}", tarsal.replacen('-', " ", 1)),
                Short,
                r,
                &format!("FMA:2450{i}"),
                &format!("FMA:2451{i}"),
            )?;
        }
        for i in 1..=5 {
            self.pair(
                &format!("metatarsal-{i}"),
                &format!("Metatarsal {i}"),
                &format!("Os metatarsale {i}"),
                Long,
                r,
                &format!("FMA:2460{i}"),
                &format!("FMA:2461{i}"),
            )?;
        }
        for (ti, toe) in TOES.iter().enumerate() {
            for (pi, phalanx) in phalanx_types(ti).iter().enumerate() {
                self.pair(
                    &format!("phalanx-{phalanx}-{toe}"),
                    &format!(
                        "{} Phalanx ({})",
                        capitalize(phalanx),
                        toe.replacen('-', " ", 1)
                    ),
                    &format!("Phalanx {phalanx} digiti pedis {}", ti + 1),
                    Long,
                    r,
                    &format!("FMA:247{ti}{pi}"),
                    &format!("FMA:248{ti}{pi}"),
                )?;
            }
        }
        Ok(())
    }
}

/// Build the full catalog in declaration order.
///
/// # Errors
///
/// Returns `TypeError` if an enumerated id or FMA code is malformed. The
/// inputs are fixed, so this only fails on an authoring mistake.
pub fn catalog() -> Result<Vec<BoneTemplate>, TypeError> {
    let mut builder = CatalogBuilder::default();
    builder.cranial()?;
    builder.facial()?;
    builder.vertebral()?;
    builder.thoracic_cage()?;
    builder.upper_limb()?;
    builder.lower_limb()?;
    Ok(builder.entries)
}
