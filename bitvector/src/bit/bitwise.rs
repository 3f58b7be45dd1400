/// Read-only access to a packed collection of bits.
///
/// Implemented for single storage words, word slices and [`BitVector`](crate::BitVector).
/// See also [`BitwiseMut`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait Bitwise {
    fn index(&self, index: usize) -> bool;
    /// Positions of the set bits, in increasing order.
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize>;
    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.support().next()
    }
    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.support().last()
    }
    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }
    #[inline]
    fn parity(&self) -> bool {
        (self.weight() % 2) == 1
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_body {
    ($delegate_trait:path) => {
        #[inline]
        fn index(&self, index: usize) -> bool {
            <Self as $delegate_trait>::index(self, index)
        }

        #[inline]
        fn support(&self) -> impl ::sorted_iter::SortedIterator<Item = usize> {
            <Self as $delegate_trait>::support(self)
        }

        #[inline]
        fn max_support(&self) -> Option<usize> {
            <Self as $delegate_trait>::max_support(self)
        }

        #[inline]
        fn min_support(&self) -> Option<usize> {
            <Self as $delegate_trait>::min_support(self)
        }

        #[inline]
        fn weight(&self) -> usize {
            <Self as $delegate_trait>::weight(self)
        }

        #[inline]
        fn parity(&self) -> bool {
            <Self as $delegate_trait>::parity(self)
        }

        #[inline]
        fn is_zero(&self) -> bool {
            <Self as $delegate_trait>::is_zero(self)
        }
    };
}

/// See also [`Bitwise`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool);
    fn negate_index(&mut self, index: usize);
    fn clear_bits(&mut self);

    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        for j in 0..bit_count {
            self.assign_index(j, random_number_generator.r#gen());
        }
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_mut_body {
    ($delegate_trait:path) => {
        #[inline]
        fn assign_index(&mut self, index: usize, to: bool) {
            <Self as $delegate_trait>::assign_index(self, index, to)
        }
        #[inline]
        fn negate_index(&mut self, index: usize) {
            <Self as $delegate_trait>::negate_index(self, index)
        }
        #[inline]
        fn clear_bits(&mut self) {
            <Self as $delegate_trait>::clear_bits(self)
        }
    };
}

/// Population counts of the pairwise combination of two bit collections.
///
/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePairMut`].
pub trait BitwisePair<Other: ?Sized = Self> {
    fn and_weight(&self, other: &Other) -> usize;
    fn or_weight(&self, other: &Other) -> usize;
    fn xor_weight(&self, other: &Other) -> usize;
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_pair_body {
    ($other_type:ty, $delegate_trait:path) => {
        #[inline]
        fn and_weight(&self, other: &$other_type) -> usize {
            <Self as $delegate_trait>::and_weight(self, other)
        }
        #[inline]
        fn or_weight(&self, other: &$other_type) -> usize {
            <Self as $delegate_trait>::or_weight(self, other)
        }
        #[inline]
        fn xor_weight(&self, other: &$other_type) -> usize {
            <Self as $delegate_trait>::xor_weight(self, other)
        }
    };
}

/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePair`].
pub trait BitwisePairMut<Other: ?Sized + Bitwise = Self>: Bitwise + BitwiseMut + BitwisePair<Other> {
    fn assign(&mut self, other: &Other);
    fn bitand_assign(&mut self, other: &Other);
    fn bitor_assign(&mut self, other: &Other);
    fn bitxor_assign(&mut self, other: &Other);
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_pair_mut_body {
    ($other_type:ty, $delegate_trait:path) => {
        #[inline]
        fn assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::assign(self, other);
        }
        #[inline]
        fn bitand_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitand_assign(self, other);
        }
        #[inline]
        fn bitor_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitor_assign(self, other);
        }
        #[inline]
        fn bitxor_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitxor_assign(self, other);
        }
    };
}

pub trait BitLength {
    fn bit_len(&self) -> usize;
    const BLOCK_BIT_LEN: usize;
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise {
    ($type:ty, $delegate_trait:path) => {
        impl $crate::Bitwise for $type {
            $crate::delegate_bitwise_body! {$delegate_trait}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_mut {
    ($type:ty, $delegate_trait:path) => {
        impl $crate::BitwiseMut for $type {
            $crate::delegate_bitwise_mut_body! {$delegate_trait}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_pair {
    ($type:ty, $other_type:ty, $delegate_trait:path) => {
        impl $crate::BitwisePair<$other_type> for $type {
            $crate::delegate_bitwise_pair_body! {$other_type, $delegate_trait}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! delegate_bitwise_pair_mut {
    ($type:ty, $other_type:ty, $delegate_trait:path) => {
        impl $crate::BitwisePairMut<$other_type> for $type {
            $crate::delegate_bitwise_pair_mut_body! {$other_type, $delegate_trait}
        }
    };
}
