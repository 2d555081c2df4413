use crate::config::{ProcessorConfig, ProcessorKind};
use crate::error::ArrayResult;
use crate::processors::iterators::IterProcessor;
use crate::processors::loops::LoopProcessor;
use crate::processors::processor_trait::ArrayProcessor;

/// Build a boxed array processor from a `ProcessorConfig`.
///
/// Fails with `InvalidArgument` when the config cannot drive a processor
/// (zero divisor, negative filter window).
pub fn build_processor(params: ProcessorConfig) -> ArrayResult<Box<dyn ArrayProcessor>> {
    let processor: Box<dyn ArrayProcessor> = match params.kind {
        ProcessorKind::Loops => Box::new(LoopProcessor::new(params)?),
        ProcessorKind::Iterators => Box::new(IterProcessor::new(params)?),
    };
    log::debug!("built `{}` array processor", processor.name());
    Ok(processor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_picks_implementation() {
        let loops = build_processor(ProcessorConfig::new(ProcessorKind::Loops)).unwrap();
        assert_eq!(loops.name(), "loops");

        let iters = build_processor(ProcessorConfig::new(ProcessorKind::Iterators)).unwrap();
        assert_eq!(iters.name(), "iterators");
    }

    #[test]
    fn test_factory_propagates_config_errors() {
        let params = ProcessorConfig {
            divisor: 0,
            ..ProcessorConfig::new(ProcessorKind::Iterators)
        };
        assert!(build_processor(params).is_err());
    }
}
