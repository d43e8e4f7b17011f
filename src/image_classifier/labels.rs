//! Static table of skin condition names, index-aligned with the model's
//! output ordering. Treated as immutable configuration data; the alignment
//! between output position and label is a deployment invariant.

pub const LABELS: [&str; 197] = [
    "acne vulgaris",
    "acrokeratosis verruciformis",
    "actinic solar damage actinic cheilitis",
    "actinic solar damage actinic keratosis",
    "actinic solar damage cutis rhomboidalis nuchae",
    "actinic solar damage pigmentation",
    "actinic solar damage solar elastosis",
    "actinic solar damage solar purpura",
    "actinic solar damage telangiectasia",
    "acute eczema",
    "allergic contact dermatitis",
    "alopecia areata",
    "androgenetic alopecia",
    "angioma",
    "angular cheilitis",
    "aphthous ulcer",
    "apocrine hydrocystoma",
    "arsenical keratosis",
    "balanitis xerotica obliterans",
    "basal cell carcinoma",
    "beau s lines",
    "becker s nevus",
    "behcet s syndrome",
    "benign keratosis",
    "blue nevus",
    "bowen s disease",
    "bowenoid papulosis",
    "cafe au lait macule",
    "callus",
    "candidiasis",
    "cellulitis",
    "chalazion",
    "clubbing of fingers",
    "compound nevus",
    "congenital nevus",
    "crowe s sign",
    "cutanea larva migrans",
    "cutaneous horn",
    "cutaneous t cell lymphoma",
    "cutis marmorata",
    "darier white disease",
    "dermatofibroma",
    "dermatosis papulosa nigra",
    "desquamation",
    "digital fibroma",
    "dilated pore of winer",
    "discoid lupus erythematosus",
    "disseminated actinic porokeratosis",
    "drug eruption",
    "dry skin eczema",
    "dyshidrosiform eczema",
    "dysplastic nevus",
    "eccrine poroma",
    "eczema",
    "epidermal nevus",
    "epidermoid cyst",
    "epithelioma adenoides cysticum",
    "erythema ab igne",
    "erythema annulare centrifigum",
    "erythema craquele",
    "erythema multiforme",
    "exfoliative erythroderma",
    "factitial dermatitis",
    "favre racouchot",
    "fibroma",
    "fibroma molle",
    "fixed drug eruption",
    "follicular mucinosis",
    "follicular retention cyst",
    "fordyce spots",
    "frictional lichenoid dermatitis",
    "ganglion",
    "geographic tongue",
    "granulation tissue",
    "granuloma annulare",
    "green nail",
    "guttate psoriasis",
    "hailey hailey disease",
    "half and half nail",
    "halo nevus",
    "herpes simplex virus",
    "herpes zoster",
    "hidradenitis suppurativa",
    "histiocytosis x",
    "hyperkeratosis palmaris et plantaris",
    "hypertrichosis",
    "ichthyosis",
    "impetigo",
    "infantile atopic dermatitis",
    "inverse psoriasis",
    "junction nevus",
    "keloid",
    "keratoacanthoma",
    "keratolysis exfoliativa of wende",
    "keratosis pilaris",
    "kerion",
    "koilonychia",
    "kyrle s disease",
    "leiomyoma",
    "lentigo maligna melanoma",
    "leukocytoclastic vasculitis",
    "leukonychia",
    "lichen planus",
    "lichen sclerosis et atrophicus",
    "lichen simplex chronicus",
    "lichen spinulosis",
    "linear epidermal nevus",
    "lipoma",
    "livedo reticularis",
    "lymphangioma circumscriptum",
    "lymphocytic infiltrate of jessner",
    "lymphomatoid papulosis",
    "mal perforans",
    "malignant melanoma",
    "median nail dystrophy",
    "melasma",
    "metastatic carcinoma",
    "milia",
    "molluscum contagiosum",
    "morphea",
    "mucha habermann disease",
    "mucous membrane psoriasis",
    "myxoid cyst",
    "nail dystrophy",
    "nail nevus",
    "nail psoriasis",
    "nail ridging",
    "neurodermatitis",
    "neurofibroma",
    "neurotic excoriations",
    "nevus comedonicus",
    "nevus incipiens",
    "nevus sebaceous of jadassohn",
    "nevus spilus",
    "nummular eczema",
    "onychogryphosis",
    "onycholysis",
    "onychomycosis",
    "onychoschizia",
    "paronychia",
    "pearl penile papules",
    "perioral dermatitis",
    "pincer nail syndrome",
    "pitted keratolysis",
    "pityriasis alba",
    "pityriasis rosea",
    "pityrosporum folliculitis",
    "poikiloderma atrophicans vasculare",
    "pomade acne",
    "pseudofolliculitis barbae",
    "pseudorhinophyma",
    "psoriasis",
    "pustular psoriasis",
    "pyoderma gangrenosum",
    "pyogenic granuloma",
    "racquet nail",
    "radiodermatitis",
    "rhinophyma",
    "rosacea",
    "scalp psoriasis",
    "scar",
    "scarring alopecia",
    "schamberg s disease",
    "sebaceous gland hyperplasia",
    "seborrheic dermatitis",
    "seborrheic keratosis",
    "skin tag",
    "solar lentigo",
    "stasis dermatitis",
    "stasis edema",
    "stasis ulcer",
    "steroid acne",
    "steroid striae",
    "steroid use abusemisuse dermatitis",
    "stomatitis",
    "strawberry hemangioma",
    "striae",
    "subungual hematoma",
    "syringoma",
    "terry s nails",
    "tinea corporis",
    "tinea cruris",
    "tinea faciale",
    "tinea manus",
    "tinea pedis",
    "tinea versicolor",
    "toe deformity",
    "trichilemmal cyst",
    "trichofolliculoma",
    "trichostasis spinulosa",
    "ulcer",
    "urticaria",
    "varicella",
    "verruca vulgaris",
    "vitiligo",
    "wound infection",
    "xerosis",
];

/// Look up the label for a score-vector position. `None` when the index
/// falls outside the table.
pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_fully_populated() {
        assert_eq!(LABELS.len(), 197);
        assert!(LABELS.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_label_lookup_is_stable() {
        assert_eq!(label(0), Some("acne vulgaris"));
        assert_eq!(label(196), Some("xerosis"));
        assert_eq!(label(0), label(0));
        assert_eq!(label(197), None);
    }
}
