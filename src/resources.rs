use crate::*;

/// Resources requested for one interactive job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRequest {
    /// Number of chunks (`select`)
    pub chunks: u32,
    /// CPU cores per chunk (`ncpus`)
    pub cores: u32,
    /// Memory per chunk, in GB (`mem`)
    pub mem_gb: u32,
    /// GPUs per chunk (`ngpus`)
    pub gpus: u32,
    /// Required iff `gpus > 0`
    pub gpu_model: Option<String>,
    pub walltime: Walltime,
}

impl ResourceRequest {
    pub fn validate(&self) -> Result<()> {
        match (self.gpus, &self.gpu_model) {
            (0, Some(m)) => bail!("GPU model {} given but no GPUs requested", m),
            (n, None) if n > 0 => bail!("{} GPUs requested but no GPU model given", n),
            _ => Ok(()),
        }
    }

    /// Human-readable breakdown of the request.
    pub fn summary(&self) -> comfy_table::Table {
        use comfy_table::*;

        let mut t = Table::new();
        t.set_header(vec!["Resource", "Request"]);
        t.add_row(vec!["Chunks".to_string(), self.chunks.to_string()]);
        t.add_row(vec!["CPU cores per chunk".to_string(), self.cores.to_string()]);
        t.add_row(vec!["Memory per chunk".to_string(), format!("{} GB", self.mem_gb)]);
        t.add_row(vec!["GPUs per chunk".to_string(), self.gpus.to_string()]);
        if let Some(m) = self.gpu_model.as_deref().filter(|_| self.gpus > 0) {
            t.add_row(vec!["GPU model".to_string(), m.to_string()]);
        }
        let secs = self.walltime.as_secs();
        t.add_row(vec![
            "Walltime".to_string(),
            format!("{} ({} s)", self.walltime, secs),
        ]);
        t
    }
}

/// Formats as a PBS resource list, eg `select=2:ncpus=4:mem=8gb:ngpus=0,walltime=01:00:00`.
impl Display for ResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "select={}:ncpus={}:mem={}gb:ngpus={}",
            self.chunks, self.cores, self.mem_gb, self.gpus
        )?;
        if self.gpus > 0 {
            if let Some(ref m) = self.gpu_model {
                write!(f, ":gpu_model={}", m)?;
            }
        }
        write!(f, ",walltime={}", self.walltime)
    }
}
