use crate::menu::select;
use crate::walltime::prompt_walltime;
use crate::*;

pub const CHUNKS: &[u32] = &[1, 2, 4, 8];
pub const CORES: &[u32] = &[1, 2, 4, 8, 16, 20, 24, 28];
pub const MEM_GB: &[u32] = &[1, 2, 4, 6, 14, 30, 62, 120];
pub const GPUS: &[u32] = &[0, 1, 2];
/// (menu name, `gpu_model` value)
pub const GPU_MODELS: &[(&str, &str)] = &[
    ("m2075", "m2075"),
    ("m2070q", "m2070q"),
    ("k20", "k20"),
    ("m40", "k40"),
    ("p100", "p100"),
];

pub mod label {
    pub const CHUNKS: &str = "Number of resource chunks";
    pub const CORES: &str = "CPU cores per chunk";
    pub const MEM: &str = "Amount of memory per chunk";
    pub const GPUS: &str = "Number of GPUs per chunk";
    pub const GPU_MODEL: &str = "GPU Model";
}

/// Which questions to skip.
#[derive(Clone, Debug, Default)]
pub struct Presets {
    pub walltime: Option<Walltime>,
    pub no_gpu: bool,
}

/// Walk the user through every question and collect the answers.
pub fn ask<P: Prompter + ?Sized>(p: &mut P, presets: Presets) -> Result<ResourceRequest> {
    let chunks = select(p, label::CHUNKS, &gen_choices(CHUNKS, "chunk", true))?;
    let cores = select(p, label::CORES, &gen_choices(CORES, "core", true))?;
    let mem_gb = select(p, label::MEM, &gen_choices(MEM_GB, "GB", false))?;

    let gpus = if presets.no_gpu {
        0
    } else {
        select(p, label::GPUS, &gen_choices(GPUS, "GPU", false))?
    };

    let gpu_model = if gpus > 0 {
        let models: Vec<_> = GPU_MODELS
            .iter()
            .map(|&(name, value)| Choice::new(name, value))
            .collect();
        Some(select(p, label::GPU_MODEL, &models)?.to_string())
    } else {
        None
    };

    let walltime = match presets.walltime {
        Some(w) => w,
        None => prompt_walltime(p)?,
    };

    let r = ResourceRequest {
        chunks,
        cores,
        mem_gb,
        gpus,
        gpu_model,
        walltime,
    };
    r.validate()?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::script::ScriptedPrompter;
    use crate::walltime::PROMPT_LABEL;

    #[test]
    fn cpu_job_skips_gpu_model() {
        let mut p = ScriptedPrompter::new(&[1, 2, 3, 0], &["01:00:00"]);
        let r = ask(&mut p, Presets::default()).unwrap();
        assert_eq!(r.to_string(), "select=2:ncpus=4:mem=6gb:ngpus=0,walltime=01:00:00");
        assert_eq!(
            p.asked,
            [label::CHUNKS, label::CORES, label::MEM, label::GPUS, PROMPT_LABEL]
        );
    }

    #[test]
    fn gpu_job_asks_model() {
        let mut p = ScriptedPrompter::new(&[0, 7, 7, 2, 4], &["12:00:00"]);
        let r = ask(&mut p, Presets::default()).unwrap();
        assert_eq!(
            r.to_string(),
            "select=1:ncpus=28:mem=120gb:ngpus=2:gpu_model=p100,walltime=12:00:00"
        );
        assert!(p.asked.iter().any(|l| l == label::GPU_MODEL));
    }

    #[test]
    fn gpu_model_sends_scheduler_value() {
        let mut p = ScriptedPrompter::new(&[0, 0, 0, 1, 3], &["01:00:00"]);
        let r = ask(&mut p, Presets::default()).unwrap();
        assert_eq!(r.gpu_model.as_deref(), Some("k40"));
        assert!(r.to_string().contains(":gpu_model=k40,"));
    }

    #[test]
    fn presets_skip_questions() {
        let mut p = ScriptedPrompter::new(&[0, 0, 0], &[]);
        let presets = Presets {
            walltime: Some("00:10:00".parse().unwrap()),
            no_gpu: true,
        };
        let r = ask(&mut p, presets).unwrap();
        assert_eq!(r.to_string(), "select=1:ncpus=1:mem=1gb:ngpus=0,walltime=00:10:00");
        assert_eq!(p.asked, [label::CHUNKS, label::CORES, label::MEM]);
    }

    #[test]
    fn aborted_prompt_fails() {
        let mut p = ScriptedPrompter::new(&[0, 0], &[]);
        assert!(ask(&mut p, Presets::default()).is_err());
    }
}
