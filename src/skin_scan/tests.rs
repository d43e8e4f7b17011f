mod effect_test;
