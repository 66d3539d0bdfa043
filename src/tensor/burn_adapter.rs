//! Burn Adapter
//!
//! Builds Int tensors from index sequences for the consuming model.

use burn::tensor::{backend::Backend, Int, Tensor, TensorData};

/// Sequência única -> tensor 1D
pub fn to_int_tensor<B: Backend>(seq: &[u32], device: &B::Device) -> Tensor<B, 1, Int> {
    // Burn CUDA & WGPU backends typically use i32 for Int tensors
    let flat: Vec<i32> = seq.iter().map(|&x| x as i32).collect();
    let len = flat.len();
    Tensor::from_data(TensorData::new(flat, [len]), device)
}

/// Lote -> tensor 2D `[batch, max_len]`, completando com `pad`
pub fn to_batch_tensor<B: Backend>(
    seqs: &[Vec<u32>],
    pad: u32,
    device: &B::Device,
) -> Tensor<B, 2, Int> {
    let batch_size = seqs.len();
    let seq_len = seqs.iter().map(Vec::len).max().unwrap_or(0);

    let mut flat: Vec<i32> = Vec::with_capacity(batch_size * seq_len);
    for seq in seqs {
        flat.extend(seq.iter().map(|&x| x as i32));
        flat.extend(std::iter::repeat(pad as i32).take(seq_len - seq.len()));
    }

    Tensor::from_data(TensorData::new(flat, [batch_size, seq_len]), device)
}
