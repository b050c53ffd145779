//! Block-splitting driver shared by every mode.
//!
//! The input is cut into `block_size` chunks (the last one may be short),
//! each chunk is mapped through a per-block closure that also receives the
//! chunk's byte offset, and the results are written back at the same offsets.

use cipherkit_types::CryptoError;

/// Copy a block result into its output slot, truncating any excess.
fn store_block(dst: &mut [u8], produced: &[u8]) -> Result<(), CryptoError> {
    if produced.len() < dst.len() {
        return Err(CryptoError::PrimitiveMismatch {
            expected: dst.len(),
            got: produced.len(),
        });
    }
    dst.copy_from_slice(&produced[..dst.len()]);
    Ok(())
}

/// Map blocks strictly in index order. `f` may carry state between blocks.
pub(crate) fn map_blocks_sequential<F>(
    input: &[u8],
    block_size: usize,
    mut f: F,
) -> Result<Vec<u8>, CryptoError>
where
    F: FnMut(&[u8], usize) -> Result<Vec<u8>, CryptoError>,
{
    if block_size == 0 {
        return Err(CryptoError::InvalidModeState);
    }
    let mut output = vec![0u8; input.len()];
    for (index, (src, dst)) in input
        .chunks(block_size)
        .zip(output.chunks_mut(block_size))
        .enumerate()
    {
        let produced = f(src, index * block_size)?;
        store_block(dst, &produced)?;
    }
    Ok(output)
}

/// Map independent blocks, fanning out over the rayon pool when the
/// `parallel` feature is on. No ordering between blocks is guaranteed.
pub(crate) fn map_blocks_parallel<F>(
    input: &[u8],
    block_size: usize,
    f: F,
) -> Result<Vec<u8>, CryptoError>
where
    F: Fn(&[u8], usize) -> Result<Vec<u8>, CryptoError> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if block_size == 0 {
            return Err(CryptoError::InvalidModeState);
        }
        let mut output = vec![0u8; input.len()];
        input
            .par_chunks(block_size)
            .zip(output.par_chunks_mut(block_size))
            .enumerate()
            .try_for_each(|(index, (src, dst))| {
                let produced = f(src, index * block_size)?;
                store_block(dst, &produced)
            })?;
        Ok(output)
    }

    #[cfg(not(feature = "parallel"))]
    {
        map_blocks_sequential(input, block_size, f)
    }
}
