pub mod aast;
pub mod ao_spine;
pub mod aspects;
pub mod birads;
pub mod bone_rads;
pub mod bosniak;
pub mod c_rads;
pub mod cad_rads;
pub mod ckd_epi;
pub mod fleischner;
pub mod lirads;
pub mod lung_rads;
pub mod o_rads;
pub mod pesi;
pub mod pirads;
pub mod prostate_volume;
pub mod renal;
pub mod villalta;
